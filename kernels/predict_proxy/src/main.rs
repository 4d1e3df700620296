// Prediction Proxy Server
//
// Forwards POST bodies from the visualization page to the prediction
// engine and relays the engine's status and JSON body unchanged. One
// request per connection, handled to completion before the next accept;
// the landscape page issues a single prediction at a time.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::time::Duration;

use predict_proxy::{proxy_request, ProxyReply, UpstreamReply};

/// CLI arguments for the proxy
#[derive(Parser, Debug)]
#[command(name = "predict_proxy")]
#[command(about = "Proxy POST /predict requests to the fraud decision engine", long_about = None)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value_t = 8787)]
    port: u16,

    /// Upstream prediction endpoint
    #[arg(short, long, default_value = "http://127.0.0.1:8000/predict")]
    upstream: String,

    /// Upstream request timeout in seconds
    #[arg(short, long, default_value_t = 10)]
    timeout: u64,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(args.timeout))
        .build()
        .context("failed to build HTTP client")?;

    let listener = TcpListener::bind(("127.0.0.1", args.port))
        .with_context(|| format!("failed to bind port {}", args.port))?;

    println!("Prediction proxy running at http://localhost:{}", args.port);
    println!("Forwarding POST bodies to {}", args.upstream);

    for stream in listener.incoming() {
        let stream = match stream {
            Ok(s) => s,
            Err(_) => continue,
        };
        if let Err(e) = handle_connection(stream, &client, &args.upstream) {
            println!("connection error: {e}");
        }
    }

    Ok(())
}

fn handle_connection(
    stream: TcpStream,
    client: &reqwest::blocking::Client,
    upstream: &str,
) -> Result<()> {
    let mut reader = BufReader::new(&stream);

    let mut request_line = String::new();
    reader.read_line(&mut request_line)?;
    let method = request_line.split_whitespace().next().unwrap_or("").to_string();

    // Drain headers, keeping only Content-Length
    let mut content_length = 0usize;
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some(value) = line
            .split_once(':')
            .filter(|(name, _)| name.eq_ignore_ascii_case("content-length"))
            .map(|(_, v)| v.trim())
        {
            content_length = value.parse().unwrap_or(0);
        }
    }

    let mut body = vec![0u8; content_length];
    if content_length > 0 {
        reader.read_exact(&mut body)?;
    }
    let body = String::from_utf8_lossy(&body).into_owned();

    let reply = proxy_request(&method, &body, |payload| forward(client, upstream, payload));
    println!("{} -> {}", method, reply.status);

    write_reply(&stream, &reply)
}

// The actual upstream call. Any transport failure collapses into its
// message; the handler turns that into the 502 body.
fn forward(
    client: &reqwest::blocking::Client,
    upstream: &str,
    payload: &str,
) -> std::result::Result<UpstreamReply, String> {
    let response = client
        .post(upstream)
        .header("Content-Type", "application/json")
        .body(payload.to_string())
        .send()
        .map_err(|e| e.to_string())?;

    let status = response.status().as_u16();
    let body = response.text().map_err(|e| e.to_string())?;
    Ok(UpstreamReply { status, body })
}

fn write_reply(mut stream: &TcpStream, reply: &ProxyReply) -> Result<()> {
    let response = format!(
        "HTTP/1.1 {} {}\r\n\
         Content-Type: application/json\r\n\
         Access-Control-Allow-Origin: *\r\n\
         Connection: close\r\n\
         Content-Length: {}\r\n\r\n{}",
        reply.status,
        reason_phrase(reply.status),
        reply.body.len(),
        reply.body
    );
    stream.write_all(response.as_bytes())?;
    Ok(())
}

fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        422 => "Unprocessable Entity",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        _ => "Response",
    }
}
