//! Debug/performance tooling for native dev builds.
//!
//! Gated behind `dev_native` in `main.rs`. Adds the perf overlay plus two sandbox
//! diagnostics: the number of proxy pairs and the simulated clock.

use bevy::diagnostic::{
    Diagnostic, DiagnosticPath, Diagnostics, EntityCountDiagnosticsPlugin,
    FrameTimeDiagnosticsPlugin, RegisterDiagnostic, SystemInformationDiagnosticsPlugin,
};
use bevy::prelude::*;
use bevy::render::diagnostic::RenderDiagnosticsPlugin;
use iyes_perf_ui::prelude::*;

use crate::sandbox::SandboxState;

const PROXY_PAIRS: DiagnosticPath = DiagnosticPath::const_new("sandbox/proxy_pairs");
const SIMULATED_SECS: DiagnosticPath = DiagnosticPath::const_new("sandbox/simulated_secs");

pub(super) fn plugin(app: &mut App) {
    app.add_plugins((
        FrameTimeDiagnosticsPlugin::default(),
        EntityCountDiagnosticsPlugin::default(),
        SystemInformationDiagnosticsPlugin::default(),
        RenderDiagnosticsPlugin,
        PerfUiPlugin,
    ));

    app.register_diagnostic(Diagnostic::new(PROXY_PAIRS))
        .register_diagnostic(Diagnostic::new(SIMULATED_SECS));

    app.add_systems(Startup, spawn_perf_ui);
    app.add_systems(
        Update,
        measure_sandbox.run_if(resource_exists::<SandboxState>),
    );
}

fn spawn_perf_ui(mut commands: Commands) {
    commands.spawn(PerfUiAllEntries::default());
}

fn measure_sandbox(mut diagnostics: Diagnostics, sandbox: Res<SandboxState>) {
    diagnostics.add_measurement(&PROXY_PAIRS, || sandbox.registry().len() as f64);
    diagnostics.add_measurement(&SIMULATED_SECS, || sandbox.world().elapsed_secs());
}
