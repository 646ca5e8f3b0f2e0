use starlit_core::systems::render::build_render_buffer;
use starlit_core::{
    AssetManifest, FixedTimestep, InputEvent, InputQueue, ProtocolLayout, RenderBuffer, Show,
    ShowConfig, ShowContext, TextMessage,
};

/// Generic show runner that wires up the engine loop.
///
/// Each concrete show (e.g., `multiverse`) creates a `thread_local!`
/// ShowRunner and exports free functions via `#[wasm_bindgen]`, because
/// wasm-bindgen cannot export generic structs directly.
pub struct ShowRunner<S: Show> {
    show: S,
    ctx: ShowContext,
    input: InputQueue,
    render_buffer: RenderBuffer,
    timestep: FixedTimestep,
    config: ShowConfig,
    layout: ProtocolLayout,
    initialized: bool,
    /// Flat buffer of audio cue IDs for SharedArrayBuffer reads.
    cue_buffer: Vec<u8>,
}

impl<S: Show> ShowRunner<S> {
    pub fn new(show: S) -> Self {
        let config = show.config();
        let timestep = FixedTimestep::new(config.fixed_dt);
        let layout = ProtocolLayout::from_config(&config);
        let cue_buffer = Vec::with_capacity(config.max_cues);

        Self {
            show,
            ctx: ShowContext::new(),
            input: InputQueue::new(),
            render_buffer: RenderBuffer::new(),
            timestep,
            config,
            layout,
            initialized: false,
            cue_buffer,
        }
    }

    /// Initialize the show. Call once after construction.
    pub fn init(&mut self) {
        self.config = self.show.config();
        self.layout = ProtocolLayout::from_config(&self.config);
        self.show.init(&mut self.ctx);
        self.initialized = true;
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Deliver a host text message (e.g. the poem service response).
    /// Sits in the mailbox until the show's next update step consumes it.
    pub fn push_text(&mut self, kind: u32, body: String) {
        self.ctx.post_text(TextMessage { kind, body });
    }

    /// Parse and store the asset manifest. A malformed manifest is logged
    /// and dropped; the show runs with placeholder visuals instead.
    pub fn load_manifest(&mut self, json: &str) {
        match AssetManifest::from_json(json) {
            Ok(manifest) => self.ctx.manifest = Some(manifest),
            Err(err) => log::warn!("ignoring malformed asset manifest: {err}"),
        }
    }

    /// Serve a show-defined string to the host.
    pub fn query(&self, key: u32) -> String {
        self.show.query(key)
    }

    /// Run one frame tick: update show, advance animations, build buffers.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        // Clear per-frame transient data
        self.ctx.clear_frame_data();

        // Fixed timestep accumulation
        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            self.show.update(&mut self.ctx, &self.input);
            self.ctx.tick_animations(self.timestep.dt());
        }

        // Drain input after update
        self.input.drain();

        // Build render buffer from entities, then append particles
        build_render_buffer(self.ctx.scene.iter(), &mut self.render_buffer);
        self.ctx.confetti.append_instances(&mut self.render_buffer);

        // Pack audio cues into flat buffer
        self.cue_buffer.clear();
        for cue in self.ctx.audio.queued() {
            self.cue_buffer.push(cue.0 as u8);
        }
    }

    // ---- Pointer accessors for SharedArrayBuffer reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn blend_split(&self) -> u32 {
        self.render_buffer.blend_split
    }

    pub fn cues_ptr(&self) -> *const u8 {
        self.cue_buffer.as_ptr()
    }

    pub fn cues_len(&self) -> u32 {
        self.cue_buffer.len() as u32
    }

    pub fn events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn world_width(&self) -> f32 {
        self.config.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.config.world_height
    }

    // ---- Capacity accessors (read by the host via wasm_bindgen exports) ----

    pub fn max_instances(&self) -> u32 {
        self.layout.max_instances as u32
    }

    pub fn max_cues(&self) -> u32 {
        self.layout.max_cues as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}
