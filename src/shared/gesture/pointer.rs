// Input sources feeding the carousel.
//
// Touch and mouse events differ only in where the horizontal coordinate comes
// from. Each source implements PointerSource; the carousel never sees anything
// else about the event.

use serde::{Deserialize, Serialize};

pub trait PointerSource {
    /// Horizontal coordinate of the primary contact, if there is one.
    fn coordinate(&self) -> Option<f64>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerPhase {
    Start,
    Move,
    End,
    Leave,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    pub client_x: f64,
    pub client_y: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TouchEvent {
    pub touches: Vec<TouchPoint>,
}

impl TouchEvent {
    pub fn at(client_x: f64) -> Self {
        Self {
            touches: vec![TouchPoint {
                client_x,
                client_y: 0.0,
            }],
        }
    }
}

impl PointerSource for TouchEvent {
    fn coordinate(&self) -> Option<f64> {
        self.touches.first().map(|touch| touch.client_x)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MouseEvent {
    pub client_x: f64,
    pub client_y: f64,
}

impl MouseEvent {
    pub fn at(client_x: f64) -> Self {
        Self {
            client_x,
            client_y: 0.0,
        }
    }
}

impl PointerSource for MouseEvent {
    fn coordinate(&self) -> Option<f64> {
        Some(self.client_x)
    }
}
