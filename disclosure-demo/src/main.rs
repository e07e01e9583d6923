mod page;
mod terminal;

use std::fs::File;
use std::time::Duration;

use crossterm::event::KeyCode;
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::terminal::Terminal;

fn main() -> std::io::Result<()> {
    // Raw mode owns the screen, so logs go to a file
    let log_file = File::create("disclosure-demo.log")?;
    if let Err(e) = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file) {
        eprintln!("logging disabled: {e}");
    }

    let arg = std::env::args().nth(1);
    let sections = page::section_count(arg.as_deref());
    let mut root = page::build(sections);
    let controllers = page::controllers(sections);
    log::info!("starting with {sections} sections");

    let mut term = Terminal::new()?;

    loop {
        term.render(&root)?;

        let Some(key) = term.next_key(Duration::from_millis(250))? else {
            continue;
        };

        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
            KeyCode::Char('c') => {
                for c in &controllers {
                    if let Err(e) = c.collapse(&mut root) {
                        log::error!("collapse failed: {e}");
                    }
                }
            }
            KeyCode::Char('e') => {
                for c in &controllers {
                    if let Err(e) = c.expand(&mut root) {
                        log::error!("expand failed: {e}");
                    }
                }
            }
            KeyCode::Char(ch) => match page::controller_for_key(&controllers, ch) {
                Some(c) => match c.toggle(&mut root) {
                    Ok(v) => log::info!("{}: {v:?}", c.target().content),
                    Err(e) => log::error!("toggle failed: {e}"),
                },
                None => log::debug!("no section for key {ch:?}"),
            },
            _ => {}
        }
    }
}
