//! Project commands.

use fluidctl_client::ProjectCreateRequest;
use uuid::Uuid;

use crate::cli::{Globals, ProjectCommands};

pub async fn run(globals: &Globals, command: ProjectCommands) -> anyhow::Result<()> {
    match command {
        ProjectCommands::Create { name } => create(globals, name).await,
        ProjectCommands::Delete { id } => delete(globals, id).await,
        ProjectCommands::List => list(globals).await,
        ProjectCommands::Describe { id } => describe(globals, id).await,
    }
}

async fn create(globals: &Globals, name: String) -> anyhow::Result<()> {
    let client = super::api_client(globals).await?;
    client
        .projects()
        .create(&ProjectCreateRequest { name })
        .await?;

    Ok(())
}

async fn delete(globals: &Globals, id: Uuid) -> anyhow::Result<()> {
    let client = super::api_client(globals).await?;
    client.projects().delete(id).await?;

    println!("Deleting project with ID: {id}");

    Ok(())
}

async fn list(globals: &Globals) -> anyhow::Result<()> {
    let client = super::api_client(globals).await?;
    let projects = client.projects().list().await?;

    println!("{}", globals.format.render(&projects)?);

    Ok(())
}

async fn describe(globals: &Globals, id: Uuid) -> anyhow::Result<()> {
    let client = super::api_client(globals).await?;
    let project = client.projects().get(id).await?;

    println!("{}", globals.format.render(&project)?);

    Ok(())
}
