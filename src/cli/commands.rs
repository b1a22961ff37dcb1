//! Command dispatch and command bodies

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Duration;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::arena::{TreeModel, TreeVariant};
use crate::builder::TreeBuilder;
use crate::cli::args::{Cli, Commands, ConfigCommands, OrderArg, VariantArg};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;
use crate::layout::{project, TreeDisplay};
use crate::parser::parse_values;
use crate::session::Session;
use crate::traversal::{traverse_values, TraversalOrder};
use crate::walker::{TraversalWalker, WalkOutcome};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(Some(Path::new(".")))?;

    match &cli.command {
        Some(Commands::Build { values, variant }) => _build(values.as_deref(), *variant, &settings),
        Some(Commands::Traverse {
            order,
            values,
            variant,
        }) => _traverse(*order, values.as_deref(), *variant, &settings),
        Some(Commands::Walk {
            order,
            values,
            variant,
            delay,
        }) => _walk(*order, values.as_deref(), *variant, *delay, &settings),
        Some(Commands::Layout { values, variant }) => {
            _layout(values.as_deref(), *variant, &settings)
        }
        Some(Commands::Repl { variant }) => _repl(*variant, &settings),
        Some(Commands::Config { command }) => _config(command, &settings),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Ok(()),
    }
}

/// Resolves command-line values/variant against the configured defaults
/// and builds the model.
fn resolve_model(
    values: Option<&str>,
    variant: Option<VariantArg>,
    settings: &Settings,
) -> CliResult<TreeModel> {
    let variant: TreeVariant = variant
        .map(Into::into)
        .unwrap_or(settings.default_variant);
    let raw = values.unwrap_or(&settings.sample_values);
    let parsed = parse_values(raw)?;
    Ok(TreeBuilder::build(variant, &parsed))
}

#[instrument(level = "debug", skip(settings))]
fn _build(
    values: Option<&str>,
    variant: Option<VariantArg>,
    settings: &Settings,
) -> CliResult<()> {
    let model = resolve_model(values, variant, settings)?;
    output::header(&format!(
        "{} tree: {} nodes, depth {}",
        model.variant(),
        model.node_count(),
        model.depth()
    ));
    output::info(&model.to_tree_string());
    Ok(())
}

#[instrument(level = "debug", skip(settings))]
fn _traverse(
    order: OrderArg,
    values: Option<&str>,
    variant: Option<VariantArg>,
    settings: &Settings,
) -> CliResult<()> {
    let model = resolve_model(values, variant, settings)?;
    let order: TraversalOrder = order.into();
    let sequence = traverse_values(&model, order);
    output::info(&format!("{}: {:?}", order, sequence));
    Ok(())
}

#[instrument(level = "debug", skip(settings))]
fn _walk(
    order: OrderArg,
    values: Option<&str>,
    variant: Option<VariantArg>,
    delay: Option<u64>,
    settings: &Settings,
) -> CliResult<()> {
    let model = resolve_model(values, variant, settings)?;
    let order: TraversalOrder = order.into();
    let settle = delay.map(Duration::from_millis).unwrap_or(settings.settle());
    debug!(?settle, "starting walk");

    let mut walker = TraversalWalker::new();
    match walker.walk(&model, order, settle, |_, value| output::highlight(value)) {
        WalkOutcome::Completed(sequence) => {
            output::success(&format!("{}: {:?}", order, sequence));
            Ok(())
        }
        WalkOutcome::Busy => Ok(()),
    }
}

#[instrument(level = "debug", skip(settings))]
fn _layout(
    values: Option<&str>,
    variant: Option<VariantArg>,
    settings: &Settings,
) -> CliResult<()> {
    let model = resolve_model(values, variant, settings)?;
    let snapshot = project(&model);
    output::info(&serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

const REPL_HELP: &str = "\
commands:
  build <v1, v2, ...>      build a tree from comma-separated values
  variant <bst|level-order> switch variant (clears the tree)
  select <value>           select the first node with this value
  unselect                 clear the selection
  add <value>              add a child to the selected node
  delete                   delete the selected node and its subtree
  walk <pre|in|post>       animated traversal walk
  show                     print the current tree
  help                     show this help
  quit                     leave the shell";

#[instrument(level = "debug", skip(settings))]
fn _repl(variant: Option<VariantArg>, settings: &Settings) -> CliResult<()> {
    let variant: TreeVariant = variant
        .map(Into::into)
        .unwrap_or(settings.default_variant);
    let mut session = Session::new(variant, settings.settle());

    output::header(&format!("treelab shell ({} variant)", variant));
    output::info(&"type 'help' for commands, 'quit' to leave");

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        output::prompt(&"treelab>");
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if !dispatch_repl_line(&mut session, line.trim()) {
            break;
        }
        io::stdout().flush()?;
    }
    Ok(())
}

/// Executes one shell line. Returns false when the session should end.
fn dispatch_repl_line(session: &mut Session, line: &str) -> bool {
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((cmd, rest)) => (cmd, rest.trim()),
        None => (line, ""),
    };

    match command {
        "" => {}
        "quit" | "exit" => return false,
        "help" => output::info(&REPL_HELP),
        "build" => output::toast(&session.build(rest)),
        "variant" => match rest {
            "bst" => output::toast(&session.set_variant(TreeVariant::Bst)),
            "level-order" => output::toast(&session.set_variant(TreeVariant::LevelOrder)),
            _ => output::error("expected 'bst' or 'level-order'"),
        },
        "select" => match rest.parse::<i64>() {
            Ok(value) => output::toast(&session.select_value(value)),
            Err(_) => output::error("expected a number"),
        },
        "unselect" => output::toast(&session.clear_selection()),
        "add" => match rest.parse::<i64>() {
            Ok(value) => output::toast(&session.add_child(value)),
            Err(_) => output::error("expected a number"),
        },
        "delete" => output::toast(&session.delete_selected()),
        "walk" => {
            let order = match rest {
                "pre" => Some(TraversalOrder::Pre),
                "in" => Some(TraversalOrder::In),
                "post" => Some(TraversalOrder::Post),
                _ => None,
            };
            match order {
                Some(order) => {
                    let toast = session.walk(order, |_, value| output::highlight(value));
                    output::toast(&toast);
                }
                None => output::error("expected 'pre', 'in' or 'post'"),
            }
        }
        "show" => match session.model() {
            Some(model) => {
                output::info(&model.to_tree_string());
                if let Some(value) = session.selected_value() {
                    output::detail(&format!("selected: {}", value));
                }
            }
            None => output::info(&"(no tree)"),
        },
        _ => output::error(&format!("unknown command: {} (try 'help')", command)),
    }
    true
}

fn _config(command: &ConfigCommands, settings: &Settings) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            output::info(&settings.to_toml());
            Ok(())
        }
        ConfigCommands::Path => {
            match Settings::global_config_path() {
                Some(path) => output::info(&path.display()),
                None => output::error("no config directory available"),
            }
            output::detail(&format!("local: ./{}", crate::config::LOCAL_CONFIG_NAME));
            Ok(())
        }
        ConfigCommands::Init => {
            let path = Settings::global_config_path().ok_or_else(|| {
                CliError::InvalidArgs("no config directory available".to_string())
            })?;
            if path.exists() {
                return Err(CliError::InvalidArgs(format!(
                    "config already exists: {}",
                    path.display()
                )));
            }
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, Settings::template())?;
            output::success(&format!("created {}", path.display()));
            Ok(())
        }
    }
}
