use js_sys::Function;
use log::{Level, LevelFilter, Log, Metadata, Record};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

use crate::{
    choice::{Choice, ChoiceProvider, RoundEvent, TurnView},
    config::GameConfig,
    error::GameError,
    game::Game,
};

/// Bad answers tolerated in a row before the callback is given up on.
const MAX_INVALID_ANSWERS: u32 = 3;

struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format!("[{}] {}", record.level(), record.args()));
        match record.level() {
            Level::Error | Level::Warn => web_sys::console::warn_1(&line),
            _ => web_sys::console::log_1(&line),
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;

fn init() {
    console_error_panic_hook::set_once();
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Info);
    }
}

#[derive(Debug, Deserialize)]
struct TableInput {
    players: Vec<String>,
    #[serde(default)]
    config: GameConfig,
}

/// Asks a JS function for each decision. The function receives the turn
/// view and answers "hit" or "stand" (or "1"/"2").
struct JsChoices<'a> {
    choose: &'a Function,
    on_event: Option<&'a Function>,
    invalid_answers: u32,
}

impl ChoiceProvider for JsChoices<'_> {
    fn choose(&mut self, turn: &TurnView<'_>) -> Result<Choice, GameError> {
        let view = serde_wasm_bindgen::to_value(turn)
            .map_err(|err| GameError::ChoiceUnavailable(err.to_string()))?;
        let answer = self
            .choose
            .call1(&JsValue::NULL, &view)
            .map_err(|err| GameError::ChoiceUnavailable(format!("callback threw {err:?}")))?;
        let answer = answer.as_string().ok_or_else(|| {
            GameError::ChoiceUnavailable(format!("callback returned {answer:?}"))
        })?;

        match answer.parse::<Choice>() {
            Ok(choice) => {
                self.invalid_answers = 0;
                Ok(choice)
            }
            Err(_) if self.invalid_answers + 1 >= MAX_INVALID_ANSWERS => Err(
                GameError::ChoiceUnavailable(format!("callback keeps answering {answer:?}")),
            ),
            Err(err) => {
                self.invalid_answers += 1;
                Err(err)
            }
        }
    }

    fn notify(&mut self, event: &RoundEvent) {
        let Some(on_event) = self.on_event else {
            return;
        };
        if let Ok(value) = serde_wasm_bindgen::to_value(event) {
            let _ = on_event.call1(&JsValue::NULL, &value);
        }
    }
}

#[wasm_bindgen]
pub struct Table {
    game: Game,
}

#[wasm_bindgen]
impl Table {
    #[wasm_bindgen(constructor)]
    pub fn new(params: &JsValue) -> Result<Table, JsValue> {
        init();
        let input: TableInput = serde_wasm_bindgen::from_value(params.clone())
            .map_err(|err| JsValue::from_str(&format!("Invalid input: {err}")))?;
        let game = Game::new(input.players, input.config)
            .map_err(|err| JsValue::from_str(&format!("Cannot seat players: {err}")))?;
        Ok(Table { game })
    }

    #[wasm_bindgen(js_name = playRound)]
    pub fn play_round(
        &mut self,
        choose: &Function,
        on_event: Option<Function>,
    ) -> Result<JsValue, JsValue> {
        let mut choices = JsChoices {
            choose,
            on_event: on_event.as_ref(),
            invalid_answers: 0,
        };
        let result = self
            .game
            .play_round(&mut choices)
            .map_err(|err| JsValue::from_str(&format!("Round failed: {err}")))?;

        serde_wasm_bindgen::to_value(&result)
            .map_err(|err| JsValue::from_str(&format!("Serialization failed: {err}")))
    }

    pub fn players(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.game.players())
            .map_err(|err| JsValue::from_str(&format!("Serialization failed: {err}")))
    }

    #[wasm_bindgen(js_name = hasSolventPlayer)]
    pub fn has_solvent_player(&self) -> bool {
        self.game.has_solvent_player()
    }
}
