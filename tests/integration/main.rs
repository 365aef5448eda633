//! Integration tests for skill and subagent discovery

mod activation;
mod concurrency;
mod naming;
mod progressive;
mod rediscovery;
mod support;
mod validation;
