//! `navctl`: resolve and inspect console navigation from the command line.

use std::convert::Infallible;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use learnhub_auth::{AttributeBag, CallerContext, Domain, Permission, Role};
use learnhub_navigation::{FilterOptions, NavigationCatalog, Navigator};
use learnhub_observability::LogFormat;

#[derive(Debug, Parser)]
#[command(name = "navctl", version, about = "Resolve LearnHub console navigation for a caller")]
pub struct Cli {
    /// Log output format on stderr (`json`, `pretty`/`text`).
    /// Falls back to `LEARNHUB_LOG_FORMAT` when omitted.
    #[arg(long, value_parser = parse_log_format, global = true)]
    pub log_format: Option<LogFormat>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Install the tracing subscriber for this invocation.
    pub fn init_logging(&self) {
        match self.log_format {
            Some(format) => learnhub_observability::init_with(format),
            None => learnhub_observability::init(),
        }
    }
}

fn parse_log_format(value: &str) -> Result<LogFormat, Infallible> {
    Ok(LogFormat::parse(value))
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve the navigation a caller would see.
    Resolve(ResolveArgs),
    /// Validate a catalog document.
    Validate(CatalogArgs),
    /// List the role → domain table.
    Roles(CatalogArgs),
    /// Print the catalog as JSON (a starting point for a custom catalog).
    Dump(CatalogArgs),
}

#[derive(Debug, Args)]
pub struct CatalogArgs {
    /// Catalog JSON document; the builtin catalog when omitted.
    #[arg(long, env = "NAVCTL_CATALOG")]
    pub catalog: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Caller context JSON: `{ "role", "permissions", "attributes" }`.
    #[arg(long)]
    pub context: Option<PathBuf>,

    /// Role (overrides the context file).
    #[arg(long)]
    pub role: Option<String>,

    /// Permission to grant; repeatable. Legacy `RESOURCE_ACTION` is accepted.
    #[arg(long = "permission", short = 'p')]
    pub permissions: Vec<String>,

    /// Attribute bag as a JSON object, merged over the context file's.
    #[arg(long)]
    pub attributes: Option<String>,

    /// Enforce group gates in addition to their children's.
    #[arg(long)]
    pub strict_parents: bool,

    /// Print per-item decisions instead of the navigation.
    #[arg(long)]
    pub explain: bool,
}

/// Execute a command and return what should be printed on stdout.
pub fn run(cli: Cli) -> anyhow::Result<String> {
    match cli.command {
        Command::Resolve(args) => resolve(args),
        Command::Validate(args) => {
            let Some(path) = args.catalog else {
                bail!("validate needs --catalog (or NAVCTL_CATALOG)");
            };
            let catalog = load_catalog(Some(&path))?;
            Ok(format!(
                "{}: ok ({} roles, {} domain trees)",
                path.display(),
                catalog.roles.len(),
                catalog.trees.len()
            ))
        }
        Command::Roles(args) => {
            let catalog = load_catalog(args.catalog.as_deref())?;
            let mut lines = Vec::new();
            for domain in Domain::ALL {
                lines.push(format!("{domain}: {}", catalog.roles.roles_in(domain).join(", ")));
            }
            Ok(lines.join("\n"))
        }
        Command::Dump(args) => {
            let catalog = load_catalog(args.catalog.as_deref())?;
            Ok(catalog.to_json_pretty()?)
        }
    }
}

fn resolve(args: ResolveArgs) -> anyhow::Result<String> {
    let catalog = load_catalog(args.catalog.catalog.as_deref())?;
    let ctx = build_context(&args)?;
    let navigator = Navigator::new(&catalog).with_options(if args.strict_parents {
        FilterOptions::strict()
    } else {
        FilterOptions::default()
    });

    if args.explain {
        to_json(&navigator.explain(&ctx))
    } else {
        to_json(&navigator.resolve(&ctx))
    }
}

fn load_catalog(path: Option<&Path>) -> anyhow::Result<NavigationCatalog> {
    match path {
        Some(path) => NavigationCatalog::from_path(path)
            .with_context(|| format!("loading catalog {}", path.display())),
        None => Ok(NavigationCatalog::builtin().clone()),
    }
}

fn build_context(args: &ResolveArgs) -> anyhow::Result<CallerContext> {
    let mut ctx = match &args.context {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading caller context {}", path.display()))?;
            serde_json::from_str::<CallerContext>(&json)
                .with_context(|| format!("parsing caller context {}", path.display()))?
        }
        None => CallerContext::default(),
    };

    if let Some(role) = &args.role {
        ctx.role = Role::from(role.clone());
    }
    for raw in &args.permissions {
        if !raw.trim().is_empty() {
            ctx.permissions.insert(Permission::normalize(raw));
        }
    }
    if let Some(raw) = &args.attributes {
        let extra: AttributeBag = serde_json::from_str(raw).context("--attributes must be a JSON object")?;
        for key in extra.keys() {
            if let Some(value) = extra.get(key) {
                ctx.attributes.insert(key, value.clone());
            }
        }
    }

    tracing::debug!(role = %ctx.role, permissions = ctx.permissions.len(), "caller context built");
    Ok(ctx)
}

fn to_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    serde_json::to_string_pretty(value).context("serializing output")
}
