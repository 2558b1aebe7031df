//! Command dispatch

use itertools::Itertools;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands, Layout, TreeInput};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{OrderSelection, Settings};
use crate::domain::{BinaryTree, NodeRef, RenderOptions, SearchTree, TraversalOrder, TreeRender};

/// Rendering recurses once per level, so deeper trees are rejected by `show`.
pub const MAX_RENDER_HEIGHT: usize = 1_000;

pub fn execute_command(cli: &Cli, settings: &Settings) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Show { input }) => _show(input, settings),
        Some(Commands::Traverse { order, input }) => _traverse(*order, input, settings),
        Some(Commands::Stats { input }) => _stats(input),
        Some(Commands::Neighbors { target, input }) => _neighbors(*target, input),
        Some(Commands::Config { command }) => _config(command, settings),
        None => Ok(()),
    }
}

/// Builds the tree described by the command line input.
#[instrument(
    level = "debug",
    skip(input),
    fields(layout = ?input.layout, values = input.values.len())
)]
pub fn build_tree(input: &TreeInput) -> CliResult<BinaryTree<i64>> {
    let tree = match input.layout {
        Layout::Search => {
            let values = input
                .values
                .iter()
                .map(|raw| parse_value(raw))
                .collect::<CliResult<Vec<_>>>()?;
            SearchTree::from_elements(values)?.into_inner()
        }
        Layout::Level => {
            let slots = input
                .values
                .iter()
                .map(|raw| parse_slot(raw))
                .collect::<CliResult<Vec<_>>>()?;
            let (tree, rest) = BinaryTree::from_level_slots_with_rest(slots);
            if !rest.is_empty() {
                return Err(CliError::InvalidArgs(format!(
                    "values after the last open slot: {}",
                    rest.iter().join(" ")
                )));
            }
            tree
        }
    };
    debug!("built {:?} tree with {} node(s)", input.layout, tree.size());
    Ok(tree)
}

fn parse_value(raw: &str) -> CliResult<i64> {
    raw.trim()
        .parse()
        .map_err(|_| CliError::InvalidArgs(format!("not an integer: {raw}")))
}

fn parse_slot(raw: &str) -> CliResult<Option<i64>> {
    match raw.trim() {
        "_" | "null" => Ok(None),
        value => parse_value(value).map(Some),
    }
}

/// One line per requested order: `<order>: <elements joined by separator>`.
pub fn traversal_lines(
    tree: &BinaryTree<i64>,
    selection: OrderSelection,
    separator: &str,
) -> Vec<(TraversalOrder, String)> {
    selection
        .orders()
        .into_iter()
        .map(|order| (order, tree.elements(order).into_iter().join(separator)))
        .collect()
}

pub fn stats_lines(tree: &BinaryTree<i64>) -> Vec<(&'static str, String)> {
    vec![
        ("size", tree.size().to_string()),
        ("height", tree.height().to_string()),
        ("leaves", tree.leaf_count().to_string()),
        ("complete", yes_no(tree.is_complete()).to_string()),
    ]
}

pub fn neighbor_lines(
    tree: &BinaryTree<i64>,
    target: i64,
) -> CliResult<Vec<(&'static str, String)>> {
    let node = tree
        .iter_level_order()
        .find(|&(_, element)| *element == target)
        .and_then(|(id, _)| tree.node(id))
        .ok_or_else(|| CliError::NotFound(target.to_string()))?;

    let position = if node.is_left_child() {
        "left child"
    } else if node.is_right_child() {
        "right child"
    } else {
        "root"
    };

    Ok(vec![
        ("position", position.to_string()),
        ("leaf", yes_no(node.is_leaf()).to_string()),
        ("parent", label(node.parent())),
        ("sibling", label(node.sibling())),
        ("uncle", label(node.uncle())),
        ("predecessor", label(node.predecessor())),
        ("successor", label(node.successor())),
    ])
}

/// Renders the tree, refusing shapes too deep to print.
pub fn render(tree: &BinaryTree<i64>, options: &RenderOptions) -> CliResult<String> {
    let height = tree.height();
    if height > MAX_RENDER_HEIGHT {
        return Err(CliError::InvalidArgs(format!(
            "tree height {height} exceeds the printable maximum of {MAX_RENDER_HEIGHT}"
        )));
    }
    Ok(tree.to_tree_string(options).to_string())
}

fn label(node: Option<NodeRef<'_, i64>>) -> String {
    node.map_or_else(|| "-".to_string(), |n| n.element().to_string())
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

#[instrument(level = "debug", skip(settings))]
fn _show(input: &TreeInput, settings: &Settings) -> CliResult<()> {
    let tree = build_tree(input)?;
    output::info(&render(&tree, &settings.render)?);
    Ok(())
}

#[instrument(level = "debug", skip(settings))]
fn _traverse(
    order: Option<OrderSelection>,
    input: &TreeInput,
    settings: &Settings,
) -> CliResult<()> {
    let tree = build_tree(input)?;
    let selection = order.unwrap_or(settings.traversal.default_order);
    for (order, line) in traversal_lines(&tree, selection, &settings.output.separator) {
        output::field(&order.to_string(), &line);
    }
    Ok(())
}

#[instrument(level = "debug")]
fn _stats(input: &TreeInput) -> CliResult<()> {
    let tree = build_tree(input)?;
    for (name, value) in stats_lines(&tree) {
        output::field(name, &value);
    }
    Ok(())
}

#[instrument(level = "debug")]
fn _neighbors(target: i64, input: &TreeInput) -> CliResult<()> {
    let tree = build_tree(input)?;
    output::header(&format!("element {target}"));
    for (name, value) in neighbor_lines(&tree, target)? {
        output::field(name, &value);
    }
    Ok(())
}

#[instrument(level = "debug", skip(settings))]
fn _config(command: &ConfigCommands, settings: &Settings) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(&settings.to_toml()?),
        ConfigCommands::Template => output::info(&Settings::template()),
    }
    Ok(())
}
