use anyhow::{Context, Result};
use colored::Colorize;

use crate::graphql::run_server;

use super::CommandContext;

pub fn handle_serve(mut ctx: CommandContext, host: Option<String>, port: Option<u16>) -> Result<()> {
    if let Some(host) = host {
        ctx.config.server.host = host;
    }
    if let Some(port) = port {
        ctx.config.server.port = port;
    }

    let addr = ctx.config.server.socket_addr()?;
    let schema = ctx.schema()?;

    println!("{} http://{}", "Running on".green(), addr);
    println!("GraphiQL: http://{}", addr);

    tokio::runtime::Runtime::new()?
        .block_on(run_server(schema, addr))
        .context("GraphQL server stopped")?;
    Ok(())
}
