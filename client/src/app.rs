use std::sync::Arc;
use std::time::Duration;

use eframe::egui;
use engine::{GamePhase, GridSize, log};
use tokio::sync::mpsc;

use crate::config::Config;
use crate::input;
use crate::ledger::{ScoreLedger, TxId, shorten_address};
use crate::state::{AppState, ClientCommand, SharedState};
use crate::ui::board;

const DIRECTION_KEYS: [egui::Key; 8] = [
    egui::Key::ArrowUp,
    egui::Key::W,
    egui::Key::ArrowDown,
    egui::Key::S,
    egui::Key::ArrowLeft,
    egui::Key::A,
    egui::Key::ArrowRight,
    egui::Key::D,
];

pub struct SnakeApp {
    shared_state: SharedState,
    command_tx: mpsc::UnboundedSender<ClientCommand>,
    ledger: Arc<dyn ScoreLedger>,
    config: Config,
    player_address: String,
    board_area: egui::Vec2,
    swipe_origin: Option<egui::Pos2>,
    submitted_tx: Option<TxId>,
    submit_status: Option<String>,
}

impl SnakeApp {
    pub fn new(
        shared_state: SharedState,
        command_tx: mpsc::UnboundedSender<ClientCommand>,
        ledger: Arc<dyn ScoreLedger>,
        config: Config,
        player_address: String,
    ) -> Self {
        Self {
            shared_state,
            command_tx,
            ledger,
            config,
            player_address,
            board_area: egui::vec2(600.0, 440.0),
            swipe_origin: None,
            submitted_tx: None,
            submit_status: None,
        }
    }

    fn send(&self, command: ClientCommand) {
        if self.command_tx.send(command).is_err() {
            log!("game loop is gone, dropping command");
        }
    }

    fn start_game(&mut self) {
        self.submitted_tx = None;
        self.submit_status = None;
        self.shared_state.clear_status();
        let grid = grid_for_area(self.board_area, self.config.cell_size_px as f32);
        self.send(ClientCommand::Start { grid });
    }

    fn handle_keys(&self, ctx: &egui::Context, app_state: &AppState) {
        if !is_running(app_state) {
            return;
        }

        let direction = ctx.input(|i| {
            DIRECTION_KEYS
                .iter()
                .copied()
                .filter(|key| i.key_pressed(*key))
                .find_map(input::key_direction)
        });

        if let Some(direction) = direction {
            self.send(ClientCommand::Turn(direction));
        }
    }

    fn handle_swipe(&mut self, response: &egui::Response, app_state: &AppState) {
        if response.drag_started() {
            self.swipe_origin = response.interact_pointer_pos();
        }

        if response.drag_stopped()
            && let (Some(origin), Some(end)) =
                (self.swipe_origin.take(), response.interact_pointer_pos())
            && is_running(app_state)
            && let Some(direction) = input::resolve_swipe(end - origin)
        {
            self.send(ClientCommand::Turn(direction));
        }
    }

    fn board_panel(&mut self, ui: &mut egui::Ui, app_state: &AppState) {
        self.board_area = ui.available_size();

        match app_state {
            AppState::Idle => {
                ui.centered_and_justified(|ui| {
                    ui.label("Press Start to play");
                });
            }
            AppState::InGame { snapshot } | AppState::GameOver { snapshot, .. } => {
                let cell_size = self.config.cell_size_px as f32;
                ui.vertical_centered(|ui| {
                    let response = board::show(ui, snapshot, cell_size);
                    self.handle_swipe(&response, app_state);

                    ui.add_space(8.0);
                    match snapshot.phase() {
                        GamePhase::Paused => {
                            ui.label(egui::RichText::new("Paused").size(18.0));
                        }
                        GamePhase::GameOver => {
                            ui.label(
                                egui::RichText::new("Game Over!")
                                    .color(egui::Color32::RED)
                                    .size(24.0),
                            );
                        }
                        _ => {
                            ui.label("Arrow keys, WASD or swipe to steer");
                        }
                    }
                });
            }
        }
    }

    fn side_panel(&mut self, ui: &mut egui::Ui, app_state: &AppState) {
        ui.add_space(8.0);
        ui.heading("Controls");
        ui.label("Eat the green tablets to grow.");
        ui.label("Avoid hitting yourself; edges wrap around.");
        ui.separator();

        let in_game = matches!(app_state, AppState::InGame { .. });
        let game_over = matches!(app_state, AppState::GameOver { .. });

        ui.horizontal(|ui| {
            let start_label = if matches!(app_state, AppState::Idle) {
                "Start"
            } else {
                "Restart"
            };
            if ui.button(start_label).clicked() {
                self.start_game();
            }

            let pause_label = match app_state {
                AppState::InGame { snapshot } if snapshot.phase() == GamePhase::Paused => "Resume",
                _ => "Pause",
            };
            if ui
                .add_enabled(in_game, egui::Button::new(pause_label))
                .clicked()
            {
                self.send(ClientCommand::TogglePause);
            }
        });

        let score = match app_state {
            AppState::Idle => 0,
            AppState::InGame { snapshot } => snapshot.score(),
            AppState::GameOver { final_score, .. } => *final_score,
        };
        ui.add_space(4.0);
        ui.label(format!("Score: {}", score));
        if let Some(best) = self.ledger.best_score(&self.player_address) {
            ui.label(format!("On-chain high: {}", best));
        }

        if let Some(status) = self.shared_state.get_status() {
            ui.colored_label(egui::Color32::RED, status);
        }

        ui.separator();
        ui.heading("Submit result");
        ui.label(format!("Player: {}", shorten_address(&self.player_address)));
        if ui
            .add_enabled(game_over, egui::Button::new("Submit on-chain"))
            .clicked()
            && let AppState::GameOver { final_score, .. } = app_state
        {
            match self.ledger.submit_score(&self.player_address, *final_score) {
                Ok(tx) => {
                    self.submit_status = Some("Score submitted".to_string());
                    self.submitted_tx = Some(tx);
                }
                Err(e) => {
                    self.submit_status = Some(format!("Submission failed: {}", e));
                    self.submitted_tx = None;
                }
            }
        }
        if let Some(tx) = &self.submitted_tx {
            ui.label(format!("Tx: {}", shorten_address(tx.as_str())));
        }
        if let Some(status) = &self.submit_status {
            ui.label(status.clone());
        }

        ui.separator();
        ui.heading("Leaderboard");
        let entries = self.ledger.leaderboard();
        if entries.is_empty() {
            ui.label("No players yet.");
        }
        for (i, entry) in entries
            .iter()
            .take(self.config.leaderboard_rows)
            .enumerate()
        {
            ui.horizontal(|ui| {
                ui.label(format!("#{}", i + 1));
                ui.label(shorten_address(&entry.address));
                ui.label(entry.score.to_string());
            });
        }
    }
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let app_state = self.shared_state.get_state();

        self.handle_keys(ctx, &app_state);

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading("Snake On-Chain");
        });
        egui::SidePanel::right("side_panel")
            .default_width(260.0)
            .show(ctx, |ui| self.side_panel(ui, &app_state));
        egui::CentralPanel::default().show(ctx, |ui| self.board_panel(ui, &app_state));

        // The runner updates SharedState off-thread; while a game is live
        // the UI polls it at roughly frame rate. Paused counts: the resume
        // broadcast has to show up without waiting for pointer input.
        if matches!(app_state, AppState::InGame { .. }) {
            ctx.request_repaint_after(Duration::from_millis(33));
        }
    }
}

fn is_running(app_state: &AppState) -> bool {
    matches!(app_state, AppState::InGame { snapshot } if snapshot.phase() == GamePhase::Running)
}

/// Grid that fits the viewport at the configured cell size, with room left
/// for the status line under the board. Clamped so the engine's 3x3 minimum
/// always holds.
fn grid_for_area(area: egui::Vec2, cell_size: f32) -> GridSize {
    let cols = ((area.x - 16.0) / cell_size).floor().max(3.0) as usize;
    let rows = ((area.y - 48.0) / cell_size).floor().max(3.0) as usize;
    GridSize::new(cols, rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_fills_available_area() {
        let grid = grid_for_area(egui::vec2(416.0, 348.0), 20.0);
        assert_eq!(grid, GridSize::new(20, 15));
    }

    #[test]
    fn test_grid_never_degenerates() {
        let grid = grid_for_area(egui::vec2(10.0, 10.0), 20.0);
        assert_eq!(grid, GridSize::new(3, 3));
    }
}
