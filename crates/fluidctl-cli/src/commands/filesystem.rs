//! Filesystem commands.

use fluidctl_client::FilesystemCreateRequest;
use uuid::Uuid;

use crate::cli::{FilesystemCommands, Globals};

pub async fn run(globals: &Globals, command: FilesystemCommands) -> anyhow::Result<()> {
    match command {
        FilesystemCommands::Create {
            project,
            name,
            size,
        } => create(globals, project, name, size).await,
        FilesystemCommands::Delete { project, id } => delete(globals, project, id).await,
        FilesystemCommands::List { project } => list(globals, project).await,
        FilesystemCommands::Describe { project, id } => describe(globals, project, id).await,
    }
}

async fn create(globals: &Globals, project: Uuid, name: String, size: String) -> anyhow::Result<()> {
    let client = super::api_client(globals).await?;
    client
        .filesystems()
        .create(project, &FilesystemCreateRequest { name, size })
        .await?;

    Ok(())
}

async fn delete(globals: &Globals, project: Uuid, id: Uuid) -> anyhow::Result<()> {
    let client = super::api_client(globals).await?;
    client.filesystems().delete(project, id).await?;

    println!("Deleting filesystem with ID: {id}");

    Ok(())
}

async fn list(globals: &Globals, project: Uuid) -> anyhow::Result<()> {
    let client = super::api_client(globals).await?;
    let filesystems = client.filesystems().list(project).await?;

    println!("{}", globals.format.render(&filesystems)?);

    Ok(())
}

async fn describe(globals: &Globals, project: Uuid, id: Uuid) -> anyhow::Result<()> {
    let client = super::api_client(globals).await?;
    let filesystem = client.filesystems().get(project, id).await?;

    println!("{}", globals.format.render(&filesystem)?);

    Ok(())
}
