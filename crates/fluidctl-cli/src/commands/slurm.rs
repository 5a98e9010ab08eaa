//! Slurm commands.

use uuid::Uuid;

use crate::cli::{ClusterCommands, Globals, SlurmCommands};

pub async fn run(globals: &Globals, command: SlurmCommands) -> anyhow::Result<()> {
    match command {
        SlurmCommands::Clusters { command } => match command {
            ClusterCommands::List { project } => list_clusters(globals, project).await,
        },
    }
}

async fn list_clusters(globals: &Globals, project: Uuid) -> anyhow::Result<()> {
    let client = super::api_client(globals).await?;
    let clusters = client.slurm().list_clusters(project).await?;

    println!("{}", globals.format.render(&clusters)?);

    Ok(())
}
