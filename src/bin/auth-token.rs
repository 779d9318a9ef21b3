use clap::Parser;

use app_auth_gateway::auth::encode_token;

/// Produce the bearer token an application sends to the gateway.
#[derive(Parser)]
#[command(name = "auth-token")]
#[command(about = "Encode an application id and secret as a gateway bearer token", long_about = None)]
struct Cli {
    /// Application id (0-255).
    #[arg(short, long)]
    id: u8,

    /// Shared secret registered for the application.
    #[arg(short, long)]
    secret: String,

    /// Print a full `Authorization:` header line.
    #[arg(long)]
    header: bool,
}

fn main() {
    let cli = Cli::parse();
    let token = encode_token(cli.id, &cli.secret);

    if cli.header {
        println!("Authorization: Bearer {}", token);
    } else {
        println!("{}", token);
    }
}
