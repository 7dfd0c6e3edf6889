use super::*;

pub fn update_ui(mut contexts: EguiContexts, mut clock: ResMut<Clock>, system: Res<OrreryState>) {
    let hours_per_second = system.orrery.simulation().time_factor / std::f64::consts::TAU;

    egui::Window::new("Orrery").show(contexts.ctx_mut(), |ui| {
        ui.label(format!("Elapsed: {:.1} s", clock.0.elapsed()));
        ui.label(format!(
            "Simulated days: {:.2}",
            clock.0.elapsed() * hours_per_second / 24.0
        ));

        ui.horizontal(|ui| {
            let label = if clock.0.is_paused() { "Resume" } else { "Pause" };
            if ui.button(label).clicked() {
                clock.0.toggle_pause();
            }
        });

        let mut rate = clock.0.rate();
        if ui
            .add(egui::Slider::new(&mut rate, 0.0..=1_000.0).logarithmic(true).text("rate"))
            .changed()
        {
            clock.0.set_rate(rate);
        }

        for frame in system.frames.iter().filter(|frame| frame.diverged) {
            if let Some(body) = system.orrery.body(frame.id) {
                ui.label(format!("{}: solver fallback", body.name()));
            }
        }
    });
}
