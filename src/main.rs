//! Tic-tac-toe entry point
//!
//! Handles platform-specific initialization and wires the page to the game session.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlInputElement};

    use tictactoe_web::consts::{BOARD_CELLS, EXPORT_MIME_TYPE};
    use tictactoe_web::persistence::{KeyValueStore, LocalStorage, MemoryStore};
    use tictactoe_web::{GameSession, GameState, PersistError, SessionConfig, platform, ui};

    /// Page instance holding the session
    struct App {
        session: GameSession<Box<dyn KeyValueStore>>,
    }

    fn document() -> Document {
        web_sys::window()
            .and_then(|w| w.document())
            .expect("no document")
    }

    /// Redraw cells and the status line
    fn render(state: &GameState) {
        let document = document();
        for (index, cell) in state.board().cells().iter().enumerate() {
            if let Some(el) = document.get_element_by_id(&format!("cell-{}", index)) {
                el.set_text_content(Some(ui::cell_text(*cell)));
            }
        }
        if let Some(el) = document.get_element_by_id("status") {
            el.set_text_content(Some(&ui::status_text(state)));
            let class = if state.winner().is_some() { "winner" } else { "" };
            let _ = el.set_attribute("class", class);
        }
    }

    /// Show a failure in the error line instead of crashing the page
    fn show_error(err: &PersistError) {
        log::error!("{}", err);
        if let Some(el) = document().get_element_by_id("error") {
            el.set_text_content(Some(&err.to_string()));
            let _ = el.set_attribute("class", "");
        }
    }

    fn clear_error() {
        if let Some(el) = document().get_element_by_id("error") {
            el.set_text_content(None);
            let _ = el.set_attribute("class", "hidden");
        }
    }

    /// Persistent note that survives later successful actions
    fn show_notice(text: &str) {
        if let Some(el) = document().get_element_by_id("notice") {
            el.set_text_content(Some(text));
            let _ = el.set_attribute("class", "");
        }
    }

    fn report(result: Result<(), PersistError>) {
        match result {
            Ok(()) => clear_error(),
            Err(e) => show_error(&e),
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
        log::info!("Tic-tac-toe starting...");

        // Without LocalStorage the game still plays, it just isn't auto-saved
        let store: Box<dyn KeyValueStore> = match LocalStorage::open() {
            Ok(store) => Box::new(store),
            Err(e) => {
                log::warn!("Auto-save disabled: {}", e);
                show_notice(&format!("Auto-save is off ({})", e));
                Box::new(MemoryStore::new())
            }
        };

        let mut session = GameSession::restore(store, SessionConfig::default());
        session.subscribe(render);

        let app = Rc::new(RefCell::new(App { session }));

        setup_board(app.clone());
        setup_save_button(app.clone());
        setup_load_input(app.clone());
        setup_clear_button(app.clone());

        render(app.borrow().session.state());

        log::info!("Tic-tac-toe running!");
    }

    fn setup_board(app: Rc<RefCell<App>>) {
        let document = document();
        let Some(board) = document.get_element_by_id("board") else {
            log::error!("Missing #board element");
            return;
        };

        for index in 0..BOARD_CELLS {
            let Ok(cell) = document.create_element("div") else {
                continue;
            };
            cell.set_id(&format!("cell-{}", index));
            let _ = cell.set_attribute("class", "cell");

            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let result = app.borrow_mut().session.click(index);
                report(result);
            });
            let _ = cell.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();

            let _ = board.append_child(&cell);
        }
    }

    fn setup_save_button(app: Rc<RefCell<App>>) {
        if let Some(btn) = document().get_element_by_id("save-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let app = app.borrow();
                let result = app.session.export().and_then(|json| {
                    platform::download_text(
                        &app.session.config().export_file_name,
                        EXPORT_MIME_TYPE,
                        &json,
                    )
                });
                report(result);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_load_input(app: Rc<RefCell<App>>) {
        let Some(input) = document()
            .get_element_by_id("load-input")
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };

        let input_clone = input.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let Some(file) = input_clone.files().and_then(|files| files.get(0)) else {
                return;
            };
            let app = app.clone();
            let input = input_clone.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = match platform::read_file_text(&file).await {
                    Ok(text) => app.borrow_mut().session.import(&text),
                    Err(e) => Err(e),
                };
                report(result);
                // Allow picking the same file again
                input.set_value("");
            });
        });
        let _ = input.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_clear_button(app: Rc<RefCell<App>>) {
        if let Some(btn) = document().get_element_by_id("clear-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let result = app.borrow_mut().session.clear();
                report(result);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use tictactoe_web::persistence::MemoryStore;
    use tictactoe_web::{GameSession, SessionConfig, ui};

    env_logger::init();
    log::info!("Tic-tac-toe (native) starting...");
    log::info!("The playable page is the web build - run with `trunk serve`");

    let mut session = GameSession::restore(MemoryStore::new(), SessionConfig::default());
    session.subscribe(|state| log::debug!("Board now:\n{}", ui::board_text(state)));

    println!("\nReplaying demo game...");
    for index in [0, 4, 1, 5, 2] {
        if let Err(e) = session.click(index) {
            eprintln!("Move failed: {}", e);
            return;
        }
    }

    println!("{}", ui::board_text(session.state()));
    println!("{}", ui::status_text(session.state()));
    match session.export() {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Export failed: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
