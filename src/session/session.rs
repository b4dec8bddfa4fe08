use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use crate::{
    graph::{EditOutcome, Graph, GraphBuilder, NodeId, Preset, generate_default},
    playback::{PlaybackController, PlaybackState, Progress},
    session::{Command, Key},
    traversal::{Algorithm, Snapshot, Trace},
};

/// Where the session's current graph came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphSource {
    Default,
    Custom,
}

/// Everything a front end needs to draw one frame.
#[derive(Debug, Clone)]
pub struct Frame {
    pub algorithm: Algorithm,
    pub source: GraphSource,
    pub snapshot: Option<Snapshot>,
    pub state: PlaybackState,
    pub len: usize,
    pub progress: Progress,
}

impl Frame {
    /// Play is offered while stopped and not parked on the last snapshot.
    /// An empty trace is playable: playing computes it.
    pub fn can_play(&self) -> bool {
        !self.state.playing && (self.len == 0 || self.progress.can_step_forward())
    }
}

/// One visualizer instance: the graph being explored, the graph being edited,
/// the selected algorithm, and the playback over its trace.
///
/// Builder edits never touch the current graph; only
/// [`apply_custom_graph`](Session::apply_custom_graph) swaps it.
pub struct Session {
    source: GraphSource,
    graph: Arc<Graph>,
    builder: GraphBuilder,
    algorithm: Algorithm,
    controller: PlaybackController,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::with_controller(PlaybackController::new())
    }

    pub fn with_speed(speed_millis: u64) -> Self {
        Self::with_controller(PlaybackController::with_speed(speed_millis))
    }

    fn with_controller(mut controller: PlaybackController) -> Self {
        let graph = Arc::new(generate_default());
        let algorithm = Algorithm::default();
        controller.set_program(Arc::clone(&graph), algorithm);
        Session {
            source: GraphSource::Default,
            graph,
            builder: GraphBuilder::new(),
            algorithm,
            controller,
        }
    }

    /// Starts from an already built graph, e.g. one read from a file.
    pub fn with_graph(graph: Graph, algorithm: Algorithm, speed_millis: u64) -> Self {
        let mut session = Self::with_speed(speed_millis);
        session.algorithm = algorithm;
        session.install(GraphSource::Custom, Arc::new(graph));
        session
    }

    pub fn source(&self) -> GraphSource {
        self.source
    }

    pub fn graph(&self) -> &Arc<Graph> {
        &self.graph
    }

    pub fn builder(&self) -> &GraphBuilder {
        &self.builder
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn controller(&self) -> &PlaybackController {
        &self.controller
    }

    pub fn trace(&self) -> Option<Trace> {
        self.controller.trace()
    }

    fn install(&mut self, source: GraphSource, graph: Arc<Graph>) {
        self.source = source;
        self.graph = graph;
        self.controller
            .set_program(Arc::clone(&self.graph), self.algorithm);
    }

    /// Switches algorithm; the trace is dropped and recomputed on the next play.
    pub fn select_algorithm(&mut self, algorithm: Algorithm) {
        debug!(%algorithm, "algorithm selected");
        self.algorithm = algorithm;
        self.controller.set_program(Arc::clone(&self.graph), algorithm);
    }

    pub fn add_node(&mut self, label: &str) -> EditOutcome {
        self.builder.add_node(label)
    }

    pub fn remove_node(&mut self, id: NodeId) -> EditOutcome {
        self.builder.remove_node(id)
    }

    pub fn add_edge(&mut self, from_label: &str, to_label: &str) -> EditOutcome {
        self.builder.add_edge(from_label, to_label)
    }

    pub fn remove_edge(&mut self, index: usize) -> EditOutcome {
        self.builder.remove_edge(index)
    }

    /// Fills the builder with a preset. The current graph is left alone.
    pub fn load_preset(&mut self, preset: Preset) {
        debug!(%preset, "preset loaded into the builder");
        self.builder.load_preset(preset);
    }

    /// Lays out the builder's nodes and makes them the current graph.
    ///
    /// Rejected, with nothing changed, when the builder is empty.
    pub fn apply_custom_graph(&mut self) -> EditOutcome {
        match self.builder.finalize() {
            Ok(graph) => {
                info!(
                    nodes = graph.len(),
                    edges = graph.edges().len(),
                    "custom graph applied"
                );
                self.install(GraphSource::Custom, Arc::new(graph));
                EditOutcome::Applied
            }
            Err(reason) => {
                debug!(%reason, "custom graph not applied");
                EditOutcome::Rejected(reason)
            }
        }
    }

    /// Empties the builder and goes back to the generated default graph.
    pub fn reset_to_default_graph(&mut self) {
        self.builder.clear();
        self.install(GraphSource::Default, Arc::new(generate_default()));
    }

    pub fn play(&mut self) {
        self.controller.play()
    }

    pub fn pause(&mut self) {
        self.controller.pause()
    }

    pub fn toggle_play(&mut self) {
        self.controller.toggle_play()
    }

    pub fn step_forward(&mut self) {
        self.controller.step_forward()
    }

    pub fn step_backward(&mut self) {
        self.controller.step_backward()
    }

    pub fn jump_to_start(&mut self) {
        self.controller.jump_to_start()
    }

    pub fn jump_to_end(&mut self) {
        self.controller.jump_to_end()
    }

    pub fn set_speed(&mut self, millis: u64) {
        self.controller.set_speed(millis)
    }

    /// Stops playback and drops the trace. On the default graph the graph is
    /// regenerated as well.
    pub fn reset(&mut self) {
        if self.source == GraphSource::Default {
            self.graph = Arc::new(generate_default());
        }
        self.controller
            .set_program(Arc::clone(&self.graph), self.algorithm);
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Play => self.play(),
            Command::Pause => self.pause(),
            Command::TogglePlay => self.toggle_play(),
            Command::Reset => self.reset(),
            Command::StepForward => self.step_forward(),
            Command::StepBackward => self.step_backward(),
            Command::JumpToStart => self.jump_to_start(),
            Command::JumpToEnd => self.jump_to_end(),
            Command::SetSpeed(millis) => self.set_speed(millis),
            Command::SelectAlgorithm(algorithm) => self.select_algorithm(algorithm),
        }
    }

    /// Returns whether the key is bound.
    pub fn handle_key(&mut self, key: Key) -> bool {
        match Command::from_key(key) {
            Some(command) => {
                self.apply(command);
                true
            }
            None => false,
        }
    }

    pub fn frame(&self) -> Frame {
        Frame {
            algorithm: self.algorithm,
            source: self.source,
            snapshot: self.controller.current(),
            state: self.controller.state(),
            len: self.controller.len(),
            progress: self.controller.progress(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::graph::RejectReason;

    #[test]
    fn starts_on_the_default_graph_without_a_trace() {
        let session = Session::new();
        let frame = session.frame();
        assert_eq!(session.source(), GraphSource::Default);
        assert_eq!(session.graph().len(), 9);
        assert_eq!(frame.algorithm, Algorithm::DepthFirst);
        assert_eq!(frame.len, 0);
        assert!(frame.snapshot.is_none());
        assert!(frame.can_play());
    }

    #[test]
    fn stepping_after_play_walks_the_trace() {
        let mut session = Session::new();
        session.play();
        session.pause();
        session.step_forward();
        let frame = session.frame();
        assert_eq!(frame.state.cursor, 1);
        assert_eq!(frame.snapshot.unwrap().visit_order_labels(), "A");
    }

    #[test]
    fn selecting_an_algorithm_clears_the_trace() {
        let mut session = Session::new();
        session.play();
        assert!(session.frame().len > 0);

        session.select_algorithm(Algorithm::BreadthFirst);
        assert_eq!(session.frame().len, 0);

        session.play();
        session.jump_to_end();
        let trace = session.trace().unwrap();
        assert_eq!(trace.algorithm(), Algorithm::BreadthFirst);
        assert_eq!(
            trace.last().unwrap().visit_order_labels(),
            "A → B → C → D → E → F → G → H → I"
        );
    }

    #[test]
    fn builder_edits_leave_the_current_graph_alone() {
        let mut session = Session::new();
        assert!(session.add_node("X").is_applied());
        assert!(session.add_node("Y").is_applied());
        assert!(session.add_edge("X", "Y").is_applied());
        assert_eq!(session.graph().len(), 9);
        assert_eq!(session.builder().nodes().len(), 2);
    }

    #[test]
    fn applying_the_builder_switches_to_the_custom_graph() {
        let mut session = Session::new();
        session.load_preset(Preset::Cycle);
        session.play();

        assert!(session.apply_custom_graph().is_applied());
        assert_eq!(session.source(), GraphSource::Custom);
        assert_eq!(session.graph().len(), 4);
        assert_eq!(session.frame().len, 0);

        session.play();
        session.jump_to_end();
        assert_eq!(
            session.frame().snapshot.unwrap().visit_order_labels(),
            "A → B → C → D"
        );
    }

    #[test]
    fn applying_an_empty_builder_is_rejected() {
        let mut session = Session::new();
        let before = Arc::clone(session.graph());
        assert_eq!(
            session.apply_custom_graph(),
            EditOutcome::Rejected(RejectReason::EmptyGraph)
        );
        assert!(Arc::ptr_eq(&before, session.graph()));
        assert_eq!(session.source(), GraphSource::Default);
    }

    #[test]
    fn reset_to_default_graph_clears_the_builder() {
        let mut session = Session::new();
        session.load_preset(Preset::Tree);
        assert!(session.apply_custom_graph().is_applied());

        session.reset_to_default_graph();
        assert_eq!(session.source(), GraphSource::Default);
        assert!(session.builder().is_empty());
        assert_eq!(**session.graph(), generate_default());
    }

    #[test]
    fn reset_regenerates_only_the_default_graph() {
        let mut session = Session::new();
        let before = Arc::clone(session.graph());
        session.play();
        session.reset();
        assert!(!Arc::ptr_eq(&before, session.graph()));
        assert_eq!(session.frame().len, 0);
        assert!(!session.frame().state.playing);

        session.load_preset(Preset::Simple);
        assert!(session.apply_custom_graph().is_applied());
        let custom = Arc::clone(session.graph());
        session.reset();
        assert!(Arc::ptr_eq(&custom, session.graph()));
    }

    #[test]
    fn keys_drive_playback() {
        let mut session = Session::new();
        assert!(session.handle_key(Key::Space));
        assert!(session.frame().state.playing);
        assert!(session.handle_key(Key::Space));
        assert!(!session.frame().state.playing);

        assert!(session.handle_key(Key::ArrowRight));
        assert!(session.handle_key(Key::ArrowRight));
        assert!(session.handle_key(Key::ArrowLeft));
        assert_eq!(session.frame().state.cursor, 1);

        assert!(session.handle_key(Key::End));
        assert!(session.frame().snapshot.unwrap().is_completed());
        assert!(!session.frame().can_play());
        assert!(session.handle_key(Key::Home));
        assert_eq!(session.frame().state.cursor, 0);

        assert!(!session.handle_key(Key::Char('q')));
        assert!(session.handle_key(Key::Char('r')));
        assert_eq!(session.frame().len, 0);
    }

    #[test]
    fn commands_cover_speed_and_algorithm() {
        let mut session = Session::new();
        session.apply(Command::SetSpeed(5000));
        session.apply(Command::SelectAlgorithm(Algorithm::BreadthFirst));
        let frame = session.frame();
        assert_eq!(frame.state.speed_millis, 1000);
        assert_eq!(frame.algorithm, Algorithm::BreadthFirst);
    }

    #[test]
    fn with_graph_starts_on_a_custom_graph() {
        let session = Session::with_graph(Preset::Simple.graph(), Algorithm::BreadthFirst, 200);
        assert_eq!(session.source(), GraphSource::Custom);
        assert_eq!(session.algorithm(), Algorithm::BreadthFirst);
        assert_eq!(session.frame().state.speed_millis, 200);
    }

    #[tokio::test(start_paused = true)]
    async fn playback_runs_to_completion() {
        let mut session = Session::with_speed(100);
        session.play();
        tokio::time::sleep(Duration::from_secs(5)).await;
        let frame = session.frame();
        assert!(!frame.state.playing);
        assert!(frame.snapshot.unwrap().is_completed());
        assert_eq!(frame.progress.percent(), 100.0);
    }
}
