use std::fmt::Write as _;
use std::io::{self, BufRead, Write};

use anyhow::Context;

use tabstrip::config::{self, StripConfig};
use tabstrip::script;
use tabstrip::strip::{ClipboardSink, MemoryViewport, Region, SystemClipboard, Viewport};
use tabstrip::TabStrip;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    if std::env::args().skip(1).any(|arg| arg == "--init-config") {
        return init_config();
    }

    let config = config::load_config();
    let viewport = MemoryViewport::new(config.scroll.client_width);
    let mut strip = TabStrip::with_initial_pages(&config, viewport, SystemClipboard::new());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    out.write_all(render(&strip).as_bytes())?;

    for (number, line) in io::stdin().lock().lines().enumerate() {
        let line = line.context("failed to read command from stdin")?;
        let cmd = match script::parse_line(&line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => continue,
            Err(err) => {
                log::warn!("line {}: {err:#}", number + 1);
                continue;
            }
        };
        script::apply(&mut strip, &cmd);
        for event in strip.take_events() {
            log::info!("{event:?}");
        }
        if cmd.redraws() {
            out.write_all(render(&strip).as_bytes())?;
            out.flush()?;
        }
    }
    Ok(())
}

fn init_config() -> anyhow::Result<()> {
    let path = config::config_path().context("no config directory available")?;
    config::save_config_to(&path, &StripConfig::default())?;
    println!("{}", path.display());
    Ok(())
}

/// Text rendering of the strip: arrows, regions, then any open overlay.
fn render<V: Viewport, C: ClipboardSink>(strip: &TabStrip<V, C>) -> String {
    let t = strip.translations();
    let layout = strip.layout();
    let arrows = strip.arrows();
    let mut line = String::new();

    if arrows.left {
        let _ = write!(line, "‹ {} ", t.scroll_left);
    }
    for region in &layout.regions {
        match region {
            Region::Gap(gap) => {
                if gap.drop_hover {
                    line.push_str(" ▼ ");
                } else if gap.insert_visible {
                    let _ = write!(line, " (+ {}) ", t.insert_page);
                } else {
                    line.push_str(" | ");
                }
            }
            Region::Tab(tab) => {
                let (open, close) = match (tab.active, tab.editing) {
                    (_, true) => ("[", "▏]"),
                    (true, false) => ("[", "]"),
                    (false, false) => (" ", " "),
                };
                let drag = if tab.dragging { "~" } else { "" };
                let hover = if tab.drop_hover { "*" } else { "" };
                let _ = write!(
                    line,
                    "{open}{drag}{} {}#{}{hover}{close}",
                    tab.icon.glyph(),
                    tab.label,
                    tab.id
                );
            }
        }
    }
    let _ = write!(line, " (+ {})", t.add_page);
    if arrows.right {
        let _ = write!(line, " {} ›", t.scroll_right);
    }
    line.push('\n');

    if let Some(menu) = strip.menu() {
        let _ = writeln!(line, "  {} #{}", menu.title, menu.page);
        for item in &menu.items {
            let state = if item.enabled { "" } else { " (disabled)" };
            let _ = writeln!(line, "    - {}{state}", item.label);
        }
    }
    if let Some(page) = strip.pending_delete() {
        let name = strip
            .pages()
            .get(page)
            .map(|p| p.name.as_str())
            .unwrap_or_default();
        let _ = writeln!(line, "  {}: {}", t.delete_dialog_title, t.delete_question(name));
        let _ = writeln!(
            line,
            "    [{}] [{}]",
            t.delete_dialog_confirm, t.delete_dialog_cancel
        );
    }
    line
}
