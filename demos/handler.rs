//! Example showing how a request handler turns failures into `HttpError`s.
//!
//! Each lookup fails in a different way. The handler logs the error with its
//! cause chain and prints the response a client would receive.
//!
//! Run with: cargo run --example handler

use http_fault::HttpError;

#[derive(Debug, thiserror::Error)]
#[error("connection pool exhausted after {0} attempts")]
struct PoolExhausted(u32);

fn lookup(user: &str) -> Result<String, HttpError> {
    match user {
        "" => Err(HttpError::bad_request("user name must not be empty")),
        "alice" => Ok("Alice Liddell".to_owned()),
        "mallory" => Err(HttpError::not_allowed("you may not view this user")),
        "db" => Err(HttpError::bug_caused_by(
            "user table lookup failed",
            PoolExhausted(3),
        )),
        "beta" => Err(HttpError::feature_unavailable("profiles are in maintenance")),
        _ => Err(HttpError::not_found()),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== HttpError handler example ===\n");

    for user in ["alice", "", "mallory", "bob", "db", "beta"] {
        println!("GET /users/{user}");
        match lookup(user) {
            Ok(name) => println!("  200 OK: {name}"),
            Err(err) => {
                err.report();
                let response = err.to_response();
                println!("  {}: {}", response.status(), err.public_msg());
            }
        }
        println!();
    }

    // Misusing the constructor yields a bug instead of a bogus error.
    let err = HttpError::new(200, "all good").unwrap_err();
    println!("HttpError::new(200, ..) -> {} ({})", err.status(), err.cause_chain());
}
