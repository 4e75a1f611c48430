//! `render` command: JSON document in, markup out.

use super::RenderArgs;
use anyhow::{Context, Result};
use jsxmark::config::{Config, RenderConfig};
use jsxmark::document::{Components, Document};
use jsxmark::{debug, log};
use std::{
    fs,
    io::{self, Read, Write},
    path::Path,
};

/// Render the input document and write it to the output.
pub fn run_render(args: &RenderArgs, config: &Config) -> Result<()> {
    let input = args.input.as_deref().filter(|path| *path != Path::new("-"));
    let source = read_input(input)?;
    let name = input.map_or_else(|| "<stdin>".to_string(), |p| p.display().to_string());

    let mut render = config.render.clone();
    render.doctype |= args.doctype;

    let markup = render_source(&source, &cli_components(), &render)
        .with_context(|| format!("failed to render {name}"))?;

    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            fs::write(path, &markup)
                .with_context(|| format!("failed to write {}", path.display()))?;
            log!("render"; "{} -> {}", name, path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(markup.as_bytes())?;
            stdout.flush()?;
        }
    }

    debug!("render"; "{} bytes of markup", markup.len());
    Ok(())
}

/// Components available to documents rendered from the command line.
fn cli_components() -> Components {
    Components::with_builtins()
}

fn render_source(
    source: &str,
    components: &Components,
    render: &RenderConfig,
) -> Result<String> {
    let document = Document::from_json(source, components)?;
    Ok(document.to_markup(render))
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
        }
        None => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("failed to read stdin")?;
            Ok(source)
        }
    }
}
