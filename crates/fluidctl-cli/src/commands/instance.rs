//! Instance commands.

use std::collections::HashMap;

use anyhow::{Context, bail};
use fluidctl_client::InstanceCreateRequest;
use serde::Serialize;
use uuid::Uuid;

use crate::cli::{Globals, InstanceCommands, InstanceCreateArgs};

/// cloud-config document built from SSH public keys.
#[derive(Serialize)]
struct UserData {
    ssh_authorized_keys: Vec<String>,
}

pub async fn run(globals: &Globals, command: InstanceCommands) -> anyhow::Result<()> {
    match command {
        InstanceCommands::Create(args) => create(globals, args).await,
        InstanceCommands::Delete { project, id } => delete(globals, project, id).await,
        InstanceCommands::List { project } => list(globals, project).await,
        InstanceCommands::Describe { project, id } => describe(globals, project, id).await,
    }
}

async fn create(globals: &Globals, args: InstanceCreateArgs) -> anyhow::Result<()> {
    let user_data = build_user_data(&args)?;

    let mut filesystems = Vec::new();
    for attrs in &args.filesystem {
        filesystems.push(parse_filesystem_attrs(attrs)?);
    }

    let request = InstanceCreateRequest {
        name: args.name,
        instance_type: args.instance_type,
        image: args.image,
        user_data,
        preemptible: args.preemptible,
        filesystems: (!filesystems.is_empty()).then_some(filesystems),
    };

    let client = super::api_client(globals).await?;
    client.instances().create(args.project, &request).await?;

    Ok(())
}

async fn delete(globals: &Globals, project: Uuid, id: Uuid) -> anyhow::Result<()> {
    let client = super::api_client(globals).await?;
    client.instances().delete(project, id).await?;

    println!("Deleting instance with ID: {id}");

    Ok(())
}

async fn list(globals: &Globals, project: Uuid) -> anyhow::Result<()> {
    let client = super::api_client(globals).await?;
    let instances = client.instances().list(project).await?;

    println!("{}", globals.format.render(&instances)?);

    Ok(())
}

async fn describe(globals: &Globals, project: Uuid, id: Uuid) -> anyhow::Result<()> {
    let client = super::api_client(globals).await?;
    let instance = client.instances().get(project, id).await?;

    println!("{}", globals.format.render(&instance)?);

    Ok(())
}

/// Assemble the cloud-init user-data body: either the file named by
/// `--user-data` verbatim, or a `#cloud-config` document carrying the SSH
/// public keys.
fn build_user_data(args: &InstanceCreateArgs) -> anyhow::Result<Option<String>> {
    if let Some(path) = &args.user_data {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read user-data file {}", path.display()))?;
        return Ok(Some(contents));
    }

    if args.ssh_authorized_key.is_empty() {
        return Ok(None);
    }

    let mut keys = Vec::new();
    for path in &args.ssh_authorized_key {
        let key = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read ssh public-key file {}", path.display()))?;
        keys.push(key.trim().to_string());
    }

    let body = serde_yaml::to_string(&UserData {
        ssh_authorized_keys: keys,
    })?;

    Ok(Some(format!("#cloud-config\n{body}")))
}

/// Parse a `key=value,...` attribute list and extract the filesystem id.
fn parse_filesystem_attrs(attrs: &str) -> anyhow::Result<Uuid> {
    let parsed: HashMap<&str, &str> = attrs
        .split(',')
        .map(|attr| match attr.split_once('=') {
            Some((key, value)) => (key, value),
            None => (attr, ""),
        })
        .collect();

    let Some(id) = parsed.get("id") else {
        bail!("missing 'id' attribute in filesystem: {attrs}");
    };

    Uuid::parse_str(id).with_context(|| format!("invalid filesystem id: {id}"))
}
