use starlit_core::*;
use wasm_bindgen::prelude::*;

mod match_game;
mod poem;
mod script;
mod show;
mod stage;
mod stages;

use show::Multiverse;

starlit_web::export_show!(Multiverse, "multiverse");
