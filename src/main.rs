//! actgate Server Entry Point

use actgate::{bootstrap, logging, server};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "actgate",
    version,
    about = "Secured actuator endpoints with admin server registration"
)]
struct Cli {
    /// Bind address
    #[arg(long, env = "ACTGATE_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Bind port
    #[arg(long, env = "ACTGATE_PORT", default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() {
    logging::init();

    let cli = Cli::parse();
    let bind_addr = format!("{}:{}", cli.host, cli.port);

    let context = bootstrap::initialize(&cli.host, cli.port);

    // 登録はバックグラウンドで走り、起動をブロックしない
    context.admin.start();

    server::run(context.state, &bind_addr).await;

    // グレースフルシャットダウンの一環として登録を解除する
    context.admin.stop().await;
}
