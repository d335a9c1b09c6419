use crate::MirrorApp;
use crate::rules::stage_display_name;
use crate::ui::helpers::big_list_button;
use crate::ui::layout::message_line;
use crate::view_models::LevelCard;
use egui::{Align, Button, CentralPanel, Context, RichText};

pub fn ui_level_select(app: &mut MirrorApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 640.0;
        let content_width = ui.available_width().min(max_width);
        let button_h = 40.0;
        let cards: Vec<LevelCard> = app.level_cards();

        egui::ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
            ui.vertical_centered(|ui| {
                egui::Frame::default()
                    .fill(ui.visuals().window_fill())
                    .inner_margin(egui::Margin::symmetric(24, 16))
                    .show(ui, |ui| {
                        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
                            ui.set_width(content_width);
                            ui.heading("Choose a challenge");
                            ui.label("Look closely, describe in five words, and see what the AI makes of it.");
                            ui.add_space(12.0);

                            if let Some(notice) = app.milestone.clone() {
                                ui.group(|ui| {
                                    ui.label(RichText::new(format!(
                                        "🎉 {} challenges completed!",
                                        notice.completed
                                    )).strong());
                                    for skill in &notice.new_skills {
                                        ui.label(format!("New skill unlocked: {}", skill.label()));
                                    }
                                });
                                ui.add_space(8.0);
                            }

                            // Un bloque por etapa: 1-3, 4-6, 7-9, 10-12
                            for stage in cards.chunks(3) {
                                let Some(first) = stage.first() else { continue };
                                ui.add_space(8.0);
                                ui.label(RichText::new(format!(
                                    "{} · {}",
                                    stage_display_name(first.id),
                                    first.mode.badge()
                                )).strong());
                                ui.add_space(4.0);

                                for card in stage {
                                    let clicked = big_list_button(
                                        ui,
                                        card.label(),
                                        card.hover_text(),
                                        content_width,
                                        button_h,
                                        card.unlocked,
                                    );
                                    if clicked {
                                        let result = app.start_level(card.id);
                                        app.report(result);
                                        return;
                                    }
                                    ui.add_space(4.0);
                                }
                            }

                            ui.add_space(16.0);
                            if ui.add_sized([content_width, 36.0], Button::new("📊 View progress")).clicked() {
                                let result = app.view_progress();
                                app.report(result);
                            }
                            message_line(ui, &app.message);
                        });
                    });
            });
        });
    });
}
