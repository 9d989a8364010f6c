//! egui application shell: input form, selection checkboxes, and save action.
//!
//! All parsing and archiving happens in the core modules; this layer only
//! composes them and renders state. Every interaction is handled start to
//! finish within a frame, with no background work.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use anyhow::Context;
use eframe::egui;
use log::warn;

use crate::archive::{archive_file_name, build_archive, ensure_extension};
use crate::icons::icon_for_type;
use crate::input::read_text_file;
use crate::parser::{self, FileSet};
use crate::selection::{file_type, file_types, names_of_type};

#[derive(Default)]
pub struct TextPackApp {
    raw_text: String,
    /// Snapshot of the text backing `files`, to skip re-parsing unchanged input.
    parsed_from: Option<String>,
    files: FileSet,
    selected: BTreeSet<String>,
    archive_name: String,
    status_text: String,
}

impl eframe::App for TextPackApp {
    fn ui(&mut self, root_ui: &mut egui::Ui, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show_inside(root_ui, |ui| {
            ui.add_space(8.0);

            ui.vertical_centered(|ui| {
                ui.heading("File Creator");
            });

            ui.add_space(16.0);

            egui::ScrollArea::vertical().show(ui, |ui| {
                self.render_input_section(ui);
                ui.add_space(12.0);

                self.refresh_parse();

                if !self.files.is_empty() {
                    self.render_file_section(ui);
                    ui.add_space(12.0);

                    self.render_archive_name_input(ui);
                    ui.add_space(12.0);

                    self.render_action_buttons(ui);
                    ui.add_space(8.0);
                }

                self.render_status(ui);
            });
        });
    }
}

impl TextPackApp {
    /// Re-run the parser when the raw text changed since the last pass.
    ///
    /// On success the selection is pruned to names that survived; on failure
    /// the file list is emptied and the error lands in the status line, so
    /// the next interaction starts clean.
    fn refresh_parse(&mut self) {
        if self.parsed_from.as_deref() == Some(self.raw_text.as_str()) {
            return;
        }

        match parser::parse(&self.raw_text) {
            Ok(files) => {
                self.selected.retain(|name| files.contains(name));
                self.files = files;
            }
            Err(err) => {
                warn!("parse failed: {err}");
                self.status_text = format!("Error: {err}");
                self.files = FileSet::default();
                self.selected.clear();
            }
        }
        self.parsed_from = Some(self.raw_text.clone());
    }

    fn render_input_section(&mut self, ui: &mut egui::Ui) {
        ui.label("Paste your data here:");
        ui.add_space(4.0);
        ui.add(
            egui::TextEdit::multiline(&mut self.raw_text)
                .code_editor()
                .desired_width(f32::INFINITY)
                .desired_rows(12),
        );

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            if ui
                .button(format!(
                    "{} Load file…",
                    egui_phosphor::regular::FOLDER_OPEN
                ))
                .on_hover_text("…or choose a text file to load")
                .clicked()
            {
                self.load_input_file();
            }

            ui.label(
                egui::RichText::new("Files are delimited by `### File:` marker lines.")
                    .small()
                    .color(egui::Color32::from_gray(110)),
            );
        });
    }

    fn load_input_file(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .set_title("Load text file")
            .add_filter("Text files", &["txt", "md"])
            .pick_file()
        else {
            return;
        };

        match read_text_file(&path) {
            Ok(text) => {
                self.raw_text = text;
                self.status_text = format!("Loaded {}", path.display());
            }
            Err(err) => {
                warn!("load failed: {err}");
                self.status_text = format!("Error: {err}");
            }
        }
    }

    fn render_file_section(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(format!("Files that can be created: {}", self.files.len()));
            ui.add_space(4.0);

            self.render_group_checkboxes(ui);
            ui.separator();
            self.render_file_checkboxes(ui);
        });
    }

    /// "Select all" plus one checkbox per file type.
    fn render_group_checkboxes(&mut self, ui: &mut egui::Ui) {
        let mut all = self.selected.len() == self.files.len();
        if ui.checkbox(&mut all, "Select all files").changed() {
            if all {
                self.selected = self.files.names().map(str::to_string).collect();
            } else {
                self.selected.clear();
            }
        }

        for group_type in file_types(self.files.names()) {
            let names = names_of_type(self.files.names(), &group_type);
            let mut group = names.iter().all(|n| self.selected.contains(*n));
            if ui
                .checkbox(&mut group, format!("Select all .{group_type} files"))
                .changed()
            {
                if group {
                    self.selected.extend(names.iter().map(|n| n.to_string()));
                } else {
                    for name in names {
                        self.selected.remove(name);
                    }
                }
            }
        }
    }

    /// One checkbox per parsed file, in insertion order, with a type icon.
    fn render_file_checkboxes(&mut self, ui: &mut egui::Ui) {
        let mut toggled = Vec::new();
        for name in self.files.names() {
            let mut checked = self.selected.contains(name);
            let label = format!("{} {}", icon_for_type(file_type(name)), name);
            if ui.checkbox(&mut checked, label).changed() {
                toggled.push((name.to_string(), checked));
            }
        }

        for (name, checked) in toggled {
            if checked {
                self.selected.insert(name);
            } else {
                self.selected.remove(&name);
            }
        }
    }

    fn render_archive_name_input(&mut self, ui: &mut egui::Ui) {
        ui.label("Enter a name for the zip file (optional):");
        ui.add_space(4.0);
        ui.text_edit_singleline(&mut self.archive_name);
        ui.label(
            egui::RichText::new(
                "Defaults to generated_zip_<timestamp>.zip; .zip is appended when missing.",
            )
            .small()
            .color(egui::Color32::from_gray(110)),
        );
    }

    fn render_action_buttons(&mut self, ui: &mut egui::Ui) {
        let save_button = egui::Button::new(format!(
            "{} Save ZIP archive",
            egui_phosphor::regular::FLOPPY_DISK
        ));
        let save_enabled = !self.selected.is_empty();

        if ui
            .add_enabled(save_enabled, save_button)
            .on_disabled_hover_text("Select at least one file")
            .clicked()
        {
            self.save_archive();
        }
    }

    fn render_status(&self, ui: &mut egui::Ui) {
        if !self.status_text.is_empty() {
            ui.label(egui::RichText::new(&self.status_text).color(egui::Color32::from_gray(68)));
        }
    }

    fn save_archive(&mut self) {
        let suggested = archive_file_name(&self.archive_name);
        let dialog = rfd::FileDialog::new()
            .set_title("Save ZIP archive")
            .add_filter("ZIP archive", &["zip"])
            .set_file_name(&suggested);

        let Some(selected_path) = dialog.save_file() else {
            self.status_text = "Save cancelled.".to_string();
            return;
        };

        let output_path = ensure_extension(selected_path, "zip");
        match self.write_archive(&output_path) {
            Ok(()) => {
                self.status_text = format!("Archive saved: {}", output_path.display());
            }
            Err(err) => {
                warn!("archive save failed: {err:#}");
                self.status_text = format!("Error: {err:#}");
            }
        }
    }

    fn write_archive(&self, path: &Path) -> anyhow::Result<()> {
        let buffer = build_archive(&self.files, &self.selected)?;
        fs::write(path, &buffer)
            .with_context(|| format!("Failed to write archive file {:?}", path))?;
        Ok(())
    }
}
