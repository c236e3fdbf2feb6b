// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! source-switch CLI
//!
//! Loads a core/alternate source selection and shows how outbound URLs are
//! rewritten, or performs a request through the interceptor chain.

use std::env;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use source_switch::{
    ExecutionContext, HttpClient, HttpClientConfig, PreRequestChain, RequestArgs,
    RewriteInterceptor, RewriterConfig, SelectorConfig,
};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("source_switch=info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    match args[1].as_str() {
        "rewrite" => {
            if args.len() < 4 {
                eprintln!("Usage: source-switch rewrite <config.json> <url>...");
                return ExitCode::from(1);
            }
            rewrite_urls(&args[2], &args[3..])
        }
        "fetch" => {
            if args.len() < 4 {
                eprintln!("Usage: source-switch fetch <config.json> <url> [OPTIONS]");
                return ExitCode::from(1);
            }
            let options = match FetchOptions::parse(&args[4..]) {
                Ok(options) => options,
                Err(e) => {
                    eprintln!("{}", e);
                    return ExitCode::from(1);
                }
            };
            fetch_url(&args[2], &args[3], options).await
        }
        "--help" | "-h" | "help" => {
            print_usage();
            ExitCode::SUCCESS
        }
        "--version" | "-v" | "version" => {
            println!("source-switch {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            ExitCode::from(1)
        }
    }
}

fn print_usage() {
    println!(
        r#"source-switch - Outbound Request Source Switching

USAGE:
    source-switch <COMMAND> [OPTIONS]

COMMANDS:
    rewrite <config> <url>...   Show how each URL would be rewritten
    fetch <config> <url>        Fetch a URL through the rewriting interceptor
    help                        Show this help message
    version                     Show version information

FETCH OPTIONS:
    -X, --method <METHOD>       Request method (default GET, POST with --data)
    -H, --header <NAME: VALUE>  Add a request header
    -d, --data <BODY>           Request body
    --timeout <SECS>            Request timeout
    --user-agent <UA>           Client user agent
    --proxy <URL>               Route requests through a proxy

CONFIG:
    {{
      "core":      {{ "key": "core",   "domains": {{ "api": "api.example.com" }} }},
      "alternate": {{ "key": "mirror", "domains": {{ "api": "api.mirror.example.com" }} }}
    }}

EXAMPLES:
    source-switch rewrite selector.json https://api.example.com/v1/ping
    RUST_LOG=source_switch=debug source-switch fetch selector.json https://api.example.com/v1/ping
"#
    );
}

fn load_interceptor(path: &str, client: Arc<HttpClient>) -> Option<RewriteInterceptor> {
    match SelectorConfig::load(path) {
        Ok(selector) => Some(RewriteInterceptor::from_config(
            RewriterConfig::from(selector),
            client,
        )),
        Err(e) => {
            eprintln!("Failed to load {}: {}", path, e);
            None
        }
    }
}

/// Options accepted by `fetch`
#[derive(Default)]
struct FetchOptions {
    method: Option<Method>,
    headers: Vec<(String, String)>,
    body: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    proxy: Option<String>,
}

impl FetchOptions {
    fn parse(args: &[String]) -> Result<Self, String> {
        let mut options = FetchOptions::default();
        let mut iter = args.iter();

        while let Some(flag) = iter.next() {
            let mut value = || {
                iter.next()
                    .cloned()
                    .ok_or_else(|| format!("Missing value for {}", flag))
            };

            match flag.as_str() {
                "-X" | "--method" => {
                    let method = value()?;
                    options.method = Some(
                        Method::from_bytes(method.to_uppercase().as_bytes())
                            .map_err(|_| format!("Invalid method: {}", method))?,
                    );
                }
                "-H" | "--header" => {
                    let header = value()?;
                    let (name, val) = header
                        .split_once(':')
                        .ok_or_else(|| format!("Invalid header: {}", header))?;
                    options.headers.push((name.trim().to_string(), val.trim().to_string()));
                }
                "-d" | "--data" => options.body = Some(value()?),
                "--timeout" => {
                    let secs = value()?;
                    let secs: u64 = secs
                        .parse()
                        .map_err(|_| format!("Invalid timeout: {}", secs))?;
                    options.timeout = Some(Duration::from_secs(secs));
                }
                "--user-agent" => options.user_agent = Some(value()?),
                "--proxy" => options.proxy = Some(value()?),
                other => return Err(format!("Unknown option: {}", other)),
            }
        }

        Ok(options)
    }

    fn client_config(&self) -> HttpClientConfig {
        let mut config = HttpClientConfig::default();
        if let Some(ref user_agent) = self.user_agent {
            config = config.user_agent(user_agent.as_str());
        }
        if let Some(timeout) = self.timeout {
            config = config.timeout(timeout);
        }
        if let Some(ref proxy) = self.proxy {
            config = config.proxy(proxy.as_str());
        }
        config
    }

    fn request_args(&self) -> RequestArgs {
        let mut args = match (&self.method, &self.body) {
            (Some(method), _) => RequestArgs::new(method.clone()),
            (None, Some(_)) => RequestArgs::post(),
            (None, None) => RequestArgs::get(),
        };
        for (name, value) in &self.headers {
            args = args.header(name, value);
        }
        if let Some(ref body) = self.body {
            args = args.body(body.clone());
        }
        if let Some(timeout) = self.timeout {
            args = args.timeout(timeout);
        }
        args
    }
}

fn rewrite_urls(config: &str, urls: &[String]) -> ExitCode {
    let client = match HttpClient::new() {
        Ok(c) => Arc::new(c),
        Err(e) => {
            eprintln!("Failed to create HTTP client: {}", e);
            return ExitCode::from(1);
        }
    };

    let interceptor = match load_interceptor(config, client) {
        Some(i) => i,
        None => return ExitCode::from(1),
    };

    let mut ctx = ExecutionContext::new();
    if interceptor.init(&mut ctx, false, false) {
        println!("[SKIP] Rewriting disabled for this source selection");
        for url in urls {
            println!("{}", url);
        }
        return ExitCode::SUCCESS;
    }

    for url in urls {
        let rewritten = interceptor.rewrite(&mut ctx, url);
        if rewritten == *url {
            println!("  {}", url);
        } else {
            println!("* {} -> {}", url, rewritten);
        }
    }

    ExitCode::SUCCESS
}

async fn fetch_url(config: &str, url: &str, options: FetchOptions) -> ExitCode {
    let client = match HttpClient::with_config(options.client_config()) {
        Ok(c) => Arc::new(c),
        Err(e) => {
            eprintln!("Failed to create HTTP client: {}", e);
            return ExitCode::from(1);
        }
    };

    let interceptor = match load_interceptor(config, client.clone()) {
        Some(i) => i,
        None => return ExitCode::from(1),
    };

    let mut chain = PreRequestChain::new();
    chain.add(interceptor);

    let mut ctx = ExecutionContext::new();
    match chain
        .send(&mut ctx, client.as_ref(), url, &options.request_args())
        .await
    {
        Ok(response) => {
            println!("\n=== Response ===");
            println!("Status: {}", response.status);
            println!("URL: {}", response.url);
            println!("Served by: {}", response.host().unwrap_or("-"));
            println!("Rewritten: {}", ctx.rewrites() > 0);
            println!("Content-Type: {:?}", response.content_type());
            println!("Size: {} bytes", response.body_len());
            println!("Time: {}ms", response.response_time_ms);
            if let Ok(text) = response.text() {
                println!("\n{}", text);
            }

            if response.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(2)
            }
        }
        Err(e) => {
            eprintln!("Failed to fetch URL: {}", e);
            ExitCode::from(1)
        }
    }
}
