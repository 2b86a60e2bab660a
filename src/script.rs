//! Line-oriented command language driving a [`TabStrip`] from text.
//!
//! One command per line; `#` starts a comment. Used by the `tabstrip`
//! binary to replay scripted sessions against the controller.

use anyhow::{Context, bail};

use crate::core::PageId;
use crate::strip::{ClipboardSink, EditKey, EditModifiers, MenuAction, TabStrip, Viewport};

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Click(PageId),
    DoubleClick(PageId),
    Menu(PageId),
    MenuClose,
    /// Picks an item from the open menu.
    Choose(MenuAction),
    SetAsFirst(PageId),
    Rename(PageId),
    Type(String),
    Key(EditKey),
    Blur,
    Copy(PageId),
    Duplicate(PageId),
    Delete(PageId),
    Confirm,
    Cancel,
    Insert(usize),
    Add,
    Hover(usize),
    Unhover,
    Drag(PageId),
    Over(f64),
    /// Drop, optionally moving the pointer to `x` first.
    Drop(Option<f64>),
    DragCancel,
    ScrollLeft,
    ScrollRight,
    Show,
}

impl Command {
    /// Whether the strip should be reprinted after this command.
    pub fn redraws(&self) -> bool {
        !matches!(self, Command::Over(_) | Command::Hover(_) | Command::Unhover)
    }
}

/// Parses one script line. Blank lines and comments yield `None`.
pub fn parse_line(line: &str) -> anyhow::Result<Option<Command>> {
    let line = line.split_once('#').map_or(line, |(code, _)| code).trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let cmd = match verb {
        "click" => Command::Click(page_arg(rest)?),
        "dblclick" => Command::DoubleClick(page_arg(rest)?),
        "menu" => Command::Menu(page_arg(rest)?),
        "menu-close" => Command::MenuClose,
        "choose" => Command::Choose(menu_action(rest)?),
        "first" => Command::SetAsFirst(page_arg(rest)?),
        "rename" => Command::Rename(page_arg(rest)?),
        "type" => {
            if rest.is_empty() {
                bail!("`type` needs text");
            }
            Command::Type(rest.to_string())
        }
        "key" => Command::Key(edit_key(rest)?),
        "blur" => Command::Blur,
        "copy" => Command::Copy(page_arg(rest)?),
        "dup" => Command::Duplicate(page_arg(rest)?),
        "delete" => Command::Delete(page_arg(rest)?),
        "confirm" => Command::Confirm,
        "cancel" => Command::Cancel,
        "insert" => Command::Insert(gap_arg(rest)?),
        "add" => Command::Add,
        "hover" => Command::Hover(gap_arg(rest)?),
        "unhover" => Command::Unhover,
        "drag" => Command::Drag(page_arg(rest)?),
        "over" => Command::Over(x_arg(rest)?),
        "drop" if rest.is_empty() => Command::Drop(None),
        "drop" => Command::Drop(Some(x_arg(rest)?)),
        "drag-cancel" => Command::DragCancel,
        "scroll" => match rest {
            "left" => Command::ScrollLeft,
            "right" => Command::ScrollRight,
            other => bail!("unknown scroll direction '{other}'"),
        },
        "show" => Command::Show,
        other => bail!("unknown command '{other}'"),
    };
    Ok(Some(cmd))
}

fn page_arg(arg: &str) -> anyhow::Result<PageId> {
    let id = arg
        .parse::<u64>()
        .with_context(|| format!("invalid page id '{arg}'"))?;
    Ok(PageId(id))
}

fn gap_arg(arg: &str) -> anyhow::Result<usize> {
    arg.parse()
        .with_context(|| format!("invalid gap index '{arg}'"))
}

fn x_arg(arg: &str) -> anyhow::Result<f64> {
    arg.parse()
        .with_context(|| format!("invalid x coordinate '{arg}'"))
}

fn menu_action(name: &str) -> anyhow::Result<MenuAction> {
    Ok(match name {
        "first" => MenuAction::SetAsFirst,
        "rename" => MenuAction::Rename,
        "copy" => MenuAction::Copy,
        "dup" => MenuAction::Duplicate,
        "delete" => MenuAction::Delete,
        other => bail!("unknown menu action '{other}'"),
    })
}

fn edit_key(name: &str) -> anyhow::Result<EditKey> {
    Ok(match name.to_ascii_lowercase().as_str() {
        "enter" => EditKey::Enter,
        "escape" | "esc" => EditKey::Escape,
        "backspace" => EditKey::Backspace,
        "delete" => EditKey::Delete,
        "left" => EditKey::Left,
        "right" => EditKey::Right,
        "home" => EditKey::Home,
        "end" => EditKey::End,
        "select-all" => EditKey::SelectAll,
        other => bail!("unknown key '{other}'"),
    })
}

/// Feeds `cmd` to the controller.
pub fn apply<V: Viewport, C: ClipboardSink>(strip: &mut TabStrip<V, C>, cmd: &Command) {
    match cmd {
        Command::Click(page) => strip.click(*page),
        Command::DoubleClick(page) => strip.double_click(*page),
        Command::Menu(page) => strip.open_menu(*page),
        Command::MenuClose => strip.close_menu(),
        Command::Choose(action) => strip.choose(*action),
        Command::SetAsFirst(page) => strip.set_as_first(*page),
        Command::Rename(page) => strip.start_rename(*page),
        Command::Type(text) => strip.rename_input(text),
        Command::Key(key) => {
            if !strip.rename_key(*key, EditModifiers::default()) {
                log::debug!("key {key:?} ignored: no rename in progress");
            }
        }
        Command::Blur => strip.blur_rename(),
        Command::Copy(page) => {
            strip.copy(*page);
        }
        Command::Duplicate(page) => strip.duplicate(*page),
        Command::Delete(page) => {
            if !strip.request_delete(*page) {
                log::debug!("delete of page {page} refused");
            }
        }
        Command::Confirm => {
            strip.confirm_delete();
        }
        Command::Cancel => strip.cancel_delete(),
        Command::Insert(gap) => {
            strip.insert_at_gap(*gap);
        }
        Command::Add => {
            strip.add_page();
        }
        Command::Hover(gap) => strip.hover_gap(Some(*gap)),
        Command::Unhover => strip.hover_gap(None),
        Command::Drag(page) => {
            if let Err(err) = strip.drag_start(*page) {
                log::debug!("drag refused: {err}");
            }
        }
        Command::Over(x) => strip.drag_move(*x),
        Command::Drop(x) => {
            if let Some(x) = x {
                strip.drag_move(*x);
            }
            strip.drag_end();
        }
        Command::DragCancel => strip.drag_cancel(),
        Command::ScrollLeft => strip.scroll_left(),
        Command::ScrollRight => strip.scroll_right(),
        Command::Show => {}
    }
}
