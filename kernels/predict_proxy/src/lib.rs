// Prediction proxy core
//
// Pass-through glue between the visualization page and the prediction
// engine: forward a POST body verbatim, relay the engine's status and JSON
// body unchanged. No business logic lives here: the only decisions the
// proxy makes are transport-level (wrong method, unreachable upstream).

use serde_json::json;

// What the upstream engine answered, status included. Application-level
// errors from the engine (non-2xx, {"error": ...} bodies) are still
// "replies" and pass through untouched.
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: String,
}

// What the proxy sends back to the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyReply {
    pub status: u16,
    pub body: String,
}

// Route one request. `forward` performs the actual upstream call and is
// only invoked for POST; its error is the transport failure message.
pub fn proxy_request<F>(method: &str, body: &str, forward: F) -> ProxyReply
where
    F: FnOnce(&str) -> Result<UpstreamReply, String>,
{
    if method != "POST" {
        return ProxyReply {
            status: 405,
            body: json!({ "error": "Method not allowed" }).to_string(),
        };
    }

    match forward(body) {
        Ok(reply) => ProxyReply {
            status: reply.status,
            body: reply.body,
        },
        Err(message) => ProxyReply {
            status: 502,
            body: json!({ "error": format!("Upstream error: {message}") }).to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn non_post_is_rejected_without_touching_upstream() {
        let called = Cell::new(false);
        for method in ["GET", "PUT", "DELETE", "OPTIONS", "HEAD"] {
            let reply = proxy_request(method, "", |_| {
                called.set(true);
                Ok(UpstreamReply { status: 200, body: "{}".into() })
            });
            assert_eq!(reply.status, 405);
            assert_eq!(reply.body, r#"{"error":"Method not allowed"}"#);
        }
        assert!(!called.get(), "forward must not run for non-POST");
    }

    #[test]
    fn post_relays_the_upstream_reply_verbatim() {
        let reply = proxy_request("POST", r#"{"features":[0.1]}"#, |body| {
            assert_eq!(body, r#"{"features":[0.1]}"#);
            Ok(UpstreamReply {
                status: 200,
                body: r#"{"risk":0.12,"uncertainty":0.004,"decision":"APPROVE"}"#.into(),
            })
        });
        assert_eq!(reply.status, 200);
        assert_eq!(
            reply.body,
            r#"{"risk":0.12,"uncertainty":0.004,"decision":"APPROVE"}"#
        );
    }

    #[test]
    fn engine_level_errors_pass_through_with_their_status() {
        // A 422 from the engine is not a proxy failure
        let reply = proxy_request("POST", "{}", |_| {
            Ok(UpstreamReply {
                status: 422,
                body: r#"{"error":"Expected 31 features"}"#.into(),
            })
        });
        assert_eq!(reply.status, 422);
        assert_eq!(reply.body, r#"{"error":"Expected 31 features"}"#);
    }

    #[test]
    fn transport_failure_becomes_502_with_the_message() {
        let reply = proxy_request("POST", "{}", |_| {
            Err("connection refused (os error 111)".to_string())
        });
        assert_eq!(reply.status, 502);
        let parsed: serde_json::Value = serde_json::from_str(&reply.body).unwrap();
        let message = parsed["error"].as_str().unwrap();
        assert!(message.starts_with("Upstream error: "));
        assert!(message.contains("connection refused"));
    }
}
