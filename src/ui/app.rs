//! Main application for the peg gomoku GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};
use tracing::{debug, info};

use super::board_view::BoardView;
use super::hud::Hud;
use super::theme::*;
use crate::board::PlayerId;
use crate::config::{MAX_PLAYERS, MIN_PLAYERS};
use crate::Session;

/// Which screen is up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    MainMenu,
    PlayerSelect,
    Playing,
}

/// Main peg gomoku application
pub struct GomokuApp {
    session: Session,
    hud: Hud,
    board_view: BoardView,
    screen: Screen,
}

impl GomokuApp {
    /// Create the app around a session built from startup configuration
    pub fn new(session: Session) -> Self {
        Self {
            session,
            hud: Hud::default(),
            board_view: BoardView::default(),
            screen: Screen::MainMenu,
        }
    }

    fn start_game(&mut self, players: usize) {
        match self.session.restart_with_players(players) {
            Ok(()) => {
                info!(players, "new game from menu");
                self.screen = Screen::Playing;
            }
            Err(err) => self.hud.message = Some(err.to_string()),
        }
    }

    fn new_game(&mut self) {
        self.session.reset();
        self.screen = Screen::Playing;
    }

    /// Large menu button; returns true when clicked
    fn menu_button(ui: &mut egui::Ui, label: &str) -> bool {
        ui.add(
            egui::Button::new(RichText::new(label).size(18.0).color(TEXT_PRIMARY))
                .fill(BUTTON_BG)
                .min_size(Vec2::from(MENU_BUTTON_SIZE)),
        )
        .clicked()
    }

    fn render_main_menu(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(ui.available_height() * 0.25);
                    ui.label(RichText::new("PEG GOMOKU").size(40.0).strong().color(TEXT_PRIMARY));
                    ui.label(RichText::new("five in a row").size(14.0).color(TEXT_MUTED));
                    ui.add_space(32.0);

                    if Self::menu_button(ui, "Play") {
                        self.screen = Screen::PlayerSelect;
                    }
                    ui.add_space(10.0);
                    if Self::menu_button(ui, "Exit") {
                        info!("exit requested from main menu");
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
    }

    fn render_player_select(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(ui.available_height() * 0.2);
                    ui.label(RichText::new("How many players?").size(28.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(24.0);

                    for players in MIN_PLAYERS..=MAX_PLAYERS {
                        if Self::menu_button(ui, &format!("{players} Players")) {
                            self.start_game(players);
                        }
                        ui.add_space(8.0);
                    }

                    ui.add_space(16.0);
                    if Self::menu_button(ui, "Back") {
                        self.screen = Screen::MainMenu;
                    }
                });
            });
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.new_game();
                        ui.close_menu();
                    }
                    ui.menu_button("Players", |ui| {
                        for players in MIN_PLAYERS..=MAX_PLAYERS {
                            if ui.button(format!("{players} Players")).clicked() {
                                self.start_game(players);
                                ui.close_menu();
                            }
                        }
                    });
                    ui.separator();
                    if ui.button("Main Menu (Esc)").clicked() {
                        self.screen = Screen::MainMenu;
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let config = self.session.config();
                    ui.label(format!(
                        "{} players - {}x{} - first to {}",
                        config.players, config.width, config.height, config.win_score
                    ));
                });
            });
        });
    }

    /// Render the side panel with turn, scores and status
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_scores_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if let Some(text) = self.hud.game_over_text() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, &text);
                }

                if let Some(msg) = &self.hud.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            for color in PLAYER_COLORS.iter().take(self.session.players().len()) {
                ui.label(RichText::new("●").size(18.0).color(*color));
            }
            ui.add_space(4.0);
            ui.label(RichText::new("PEG GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(40.0, 40.0), egui::Sense::hover());
                let accent = self
                    .hud
                    .current_turn
                    .or(self.hud.winner)
                    .map_or(TEXT_MUTED, player_color);
                ui.painter().circle_filled(rect.center(), 16.0, accent);

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(self.hud.turn_text()).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.label(
                        RichText::new(format!("Move #{}", self.hud.move_count))
                            .size(11.0)
                            .color(TEXT_SECONDARY),
                    );
                });
            });
        });
    }

    /// Render per-player scores with progress toward the win score
    fn render_scores_card(&self, ui: &mut egui::Ui) {
        let win_score = self.session.config().win_score;
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SCORES").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            for (index, player) in self.session.players().iter().enumerate() {
                let score = self.hud.scores.get(index).copied().unwrap_or(0);
                let is_turn = self.hud.current_turn == Some(PlayerId::new(index));
                ui.horizontal(|ui| {
                    ui.label(RichText::new("●").size(16.0).color(player_color(player.id())));
                    let name = RichText::new(player.name()).size(13.0).color(TEXT_PRIMARY);
                    ui.label(if is_turn { name.strong() } else { name });

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let text = RichText::new(format!("{score}/{win_score}")).size(14.0);
                        ui.label(if score + 1 >= win_score && score > 0 {
                            text.strong().color(WIN_HIGHLIGHT)
                        } else {
                            text.color(TEXT_SECONDARY)
                        });
                    });
                });
                ui.add_space(4.0);
            }

            ui.add_space(4.0);
            ui.label(RichText::new(self.hud.score_text()).size(10.0).color(TEXT_MUTED));
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.add(egui::Button::new(RichText::new("New Game").color(TEXT_PRIMARY)).fill(BUTTON_BG)).clicked() {
                    self.new_game();
                }
                if ui.add(egui::Button::new(RichText::new("Main Menu").color(TEXT_PRIMARY)).fill(BUTTON_BG)).clicked() {
                    self.screen = Screen::MainMenu;
                }
            });
        });
    }

    /// Render game over card
    fn render_game_over_card(&mut self, ui: &mut egui::Ui, text: &str) {
        Frame::new()
            .fill(GAME_OVER_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(text).size(20.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(12.0);

                    if ui.add(egui::Button::new(RichText::new("Play Again").size(14.0).strong().color(TEXT_PRIMARY))
                        .fill(egui::Color32::from_rgb(60, 100, 70)))
                        .clicked()
                    {
                        self.new_game();
                    }
                });
            });
    }

    /// Render status message card
    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(MESSAGE_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("⚠").size(14.0));
                    ui.add_space(4.0);
                    ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(BOARD_AREA_BG).inner_margin(10.0))
            .show(ctx, |ui| {
                let clicked = self.board_view.show(
                    ui,
                    self.session.board(),
                    self.hud.current_turn,
                    self.hud.last_move,
                    &self.hud.sequences,
                );

                if let Some(pos) = clicked {
                    if let Err(err) = self.session.place_piece(pos) {
                        debug!(%err, "click rejected");
                        self.hud.message = Some(err.to_string());
                    }
                }
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (new_game, back) = ctx.input(|i| (i.key_pressed(egui::Key::N), i.key_pressed(egui::Key::Escape)));

        // N - New game
        if new_game && self.screen == Screen::Playing {
            self.new_game();
        }

        // Esc - Back to the main menu
        if back {
            self.screen = Screen::MainMenu;
        }
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        match self.screen {
            Screen::MainMenu => self.render_main_menu(ctx),
            Screen::PlayerSelect => self.render_player_select(ctx),
            Screen::Playing => {
                self.render_menu_bar(ctx);
                self.render_side_panel(ctx);
                self.render_board(ctx);
            }
        }

        // Pick up events from this frame's actions
        self.hud.sync(&mut self.session);
    }
}
