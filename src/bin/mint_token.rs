use std::env;

use clap::Parser;

use fintrack::{auth, AppState};

/// Mint a bearer token for calling the fintrack API.
///
/// There is no sign-in flow in this service; tokens are issued out of band
/// with this tool, signed with the same JWT_SECRET the server was started
/// with.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The subject to embed in the token.
    #[arg(long)]
    subject: String,

    /// The email address to embed in the token.
    #[arg(long)]
    email: String,
}

fn main() {
    let args = Args::parse();

    let jwt_secret =
        env::var("JWT_SECRET").expect("The environment variable 'JWT_SECRET' must be set.");

    let state = AppState::new(&jwt_secret);
    let token = auth::encode_token(&args.subject, &args.email, state.encoding_key())
        .expect("Could not sign the token.");

    println!("{token}");
}
