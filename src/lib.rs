//! Bezier Curve Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, DragState, InteractionMode, ViewState,
};
pub use core::{
    evaluate_point, evaluate_point_recursive, evaluate_polyline, find_nearest, BezierError,
    ControlPointError, ControlPointSet, Point,
};
pub use render::{draw_scene, RenderSink};
pub use shared::{CurveLayering, EditorOptions, RenderScene};
