//! A basic example registering condition routes and dispatching requests.

use std::collections::HashSet;

use log::info;
use microroute_rs::{ActionSpec, Content, Method, Parameters, Router, RouterConfig};
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize the logger
    env_logger::init();

    let mut router = Router::new(RouterConfig::default());

    // A bare handler for the front page
    router.get("front", ActionSpec::handler(|_| Ok(Content::from("<h1>Welcome</h1>"))))?;

    // A controller-style action; the first handler in the descriptor is used
    router.get(
        "single",
        ActionSpec::builder()
            .controller("PostController")
            .handler("show", |params| {
                let slug = params.str("slug").unwrap_or("unknown");
                Ok(Content::json(&json!({ "post": slug }))?)
            })
            .build(),
    )?;

    // Any verb on the search page
    router.any("search", ActionSpec::handler(|params| {
        Ok(Content::from(format!("Searching for {}", params.str("s").unwrap_or(""))))
    }))?;

    info!("Router configured with the following routes:");
    for route in router.routes() {
        info!("  {} [{}] -> {}", route.methods(), route.condition_key(), route.condition());
    }

    // Simulate requests; the host platform would evaluate these predicates
    let requests = [
        (Method::GET, "is_front_page", Parameters::new()),
        (Method::GET, "is_single", Parameters::new().with("slug", "hello%2Dworld")),
        (Method::POST, "is_search", Parameters::new().with("s", "rust%20routing")),
        (Method::DELETE, "is_front_page", Parameters::new()),
    ];

    for (method, predicate, parameters) in requests {
        let context: HashSet<String> = HashSet::from([predicate.to_string()]);
        match router.dispatch(method, &context, parameters) {
            Ok(content) => {
                let content_type = content.content_type();
                let body = String::from_utf8_lossy(&content.into_bytes()).into_owned();
                println!("{method} {predicate}: {content_type} {body}");
            }
            Err(err) => println!("{method} {predicate}: error: {err}"),
        }
    }

    Ok(())
}
