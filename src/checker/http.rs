// src/checker/http.rs
// =============================================================================
// This module probes a single URL over HTTP.
//
// Key functionality:
// - Makes HTTP HEAD requests (status line only, no body download)
// - Never follows redirects: a 301 is reported as 301
// - Forces IPv4 by binding the client to 0.0.0.0
// - Turns network errors (DNS, refused, TLS, timeout) into "no status"
//
// The Prober trait is the seam between the batch runner and the network.
// HttpProber is the real implementation; tests plug in scripted probers.
// =============================================================================

use std::future::Future;
use std::net::{IpAddr, Ipv4Addr};
use std::time::{Duration, Instant};

use log::debug;
use reqwest::{redirect, Client};

use crate::config::CheckerConfig;
use crate::error::{CheckError, Result};

/// Raw answer from one probe, before classification
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeReply {
    /// None when no status line was received
    pub http_status: Option<u16>,
    pub elapsed: Duration,
}

/// Something that can check whether a URL answers.
///
/// Implementations must not fail: every problem is reported through
/// `ProbeReply::http_status == None`.
pub trait Prober {
    fn probe(&self, url: &str) -> impl Future<Output = ProbeReply> + Send;
}

/// Prober backed by a shared reqwest client (one connection pool per run)
#[derive(Debug, Clone)]
pub struct HttpProber {
    client: Client,
}

impl HttpProber {
    /// Builds the client from the run configuration
    pub fn new(config: &CheckerConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent.as_str())
            .redirect(redirect::Policy::none())
            .local_address(IpAddr::V4(Ipv4Addr::UNSPECIFIED))
            .build()
            .map_err(CheckError::ClientBuild)?;

        Ok(Self { client })
    }
}

impl Prober for HttpProber {
    async fn probe(&self, url: &str) -> ProbeReply {
        let started = Instant::now();
        let result = self.client.head(url).send().await;
        let elapsed = started.elapsed();

        let http_status = match result {
            Ok(response) => Some(response.status().as_u16()),
            Err(e) => {
                debug!("{} -- {}", url, describe_error(&e));
                None
            }
        };

        ProbeReply {
            http_status,
            elapsed,
        }
    }
}

// Short human-readable reason for a failed request.
// Only used for diagnostics, the audit log records the missing status.
fn describe_error(error: &reqwest::Error) -> String {
    let error_string = error.to_string();

    if error.is_timeout() {
        "request timed out".to_string()
    } else if error.is_builder() {
        format!("invalid URL: {}", error_string)
    } else if error.is_connect() {
        if error_string.contains("dns") {
            "could not resolve hostname".to_string()
        } else {
            "connection failed".to_string()
        }
    } else if error_string.contains("certificate") || error_string.contains("ssl") {
        "SSL certificate error".to_string()
    } else {
        error_string
    }
}
