//! Module providing the `Lesson` trait and all lesson implementations.
//!
//! Every lesson follows the same procedure: open the window, build its GPU
//! resources, run the render loop until it closes, then drop everything in
//! reverse order of creation.

use std::sync::Arc;

use glsteps_core::{Config, Frame, LessonKind, RenderLoop};

use crate::abs::{App, Mesh, ShaderProgram, Texture, UniformSlot};

pub mod colored;
pub mod reflection;
pub mod textures;
pub mod transforms;
pub mod uniforms;
pub mod window;

/// The Lesson trait defines the per-frame side of a lesson. Setup happens in
/// each lesson's constructor.
pub trait Lesson {
    /// Updates uniforms and issues the draw calls of one frame.
    fn render(&mut self, frame: &Frame);
}

/// Builds the lesson's resources on the current context.
pub fn setup(
    kind: LessonKind,
    gl: &Arc<glow::Context>,
    config: &Config,
    viewport: (u32, u32),
) -> Result<Box<dyn Lesson>, String> {
    Ok(match kind {
        LessonKind::Window => Box::new(window::Blank::new(gl)),
        LessonKind::Triangle | LessonKind::Quad | LessonKind::Elements => {
            Box::new(colored::Colored::new(gl, kind)?)
        }
        LessonKind::Uniforms => Box::new(uniforms::Pulsing::new(gl)?),
        LessonKind::Textures => Box::new(textures::Rippling::new(gl, config)?),
        LessonKind::Transforms => Box::new(transforms::Spinning::new(gl, config, viewport)?),
        LessonKind::Reflection => Box::new(reflection::Mirrored::new(gl, config, viewport)?),
    })
}

/// Opens the window, runs `kind` until it is closed and tears everything
/// down. Returns the number of frames rendered.
pub fn run(kind: LessonKind, config: &Config) -> Result<u64, String> {
    let mut app = App::new(config)?;
    let gl = Arc::clone(&app.gl);

    let mut lesson = setup(kind, &gl, config, app.drawable_size())?;
    log::info!("Running lesson `{}`: {}", kind, kind.summary());

    let frames = RenderLoop::new().run(&mut app, |frame| lesson.render(frame));

    // GPU objects go before the context that owns them.
    drop(lesson);
    drop(app);
    log::info!("Lesson `{}` closed after {} frames", kind, frames);
    Ok(frames)
}

/// Compiles the lesson's shader pair and uploads its geometry.
fn program_and_mesh(
    gl: &Arc<glow::Context>,
    kind: LessonKind,
) -> Result<(ShaderProgram, Mesh), String> {
    let pair = kind
        .shader_pair()
        .ok_or_else(|| format!("Lesson `{}` has no shaders", kind))?;
    let (layout, vertices, indices) = kind
        .geometry()
        .ok_or_else(|| format!("Lesson `{}` has no geometry", kind))?;

    let program = ShaderProgram::from_pair(gl, pair)?;
    let mesh = Mesh::new(gl, &program, &layout, vertices, indices)?;
    log::debug!(
        "Uploaded {} vertices for `{}` ({} floats each)",
        mesh.vertex_count(),
        kind,
        layout.floats_per_vertex()
    );
    Ok((program, mesh))
}

/// Resolves a uniform the lesson cannot do without, warning if the linker
/// dropped it.
fn required_uniform(program: &ShaderProgram, name: &str) -> UniformSlot {
    let slot = program.uniform(name);
    if !slot.is_active() {
        log::warn!("Uniform `{}` is not active in the program", slot.name());
    }
    slot
}

/// The kitten on texture unit 0 and the puppy on unit 1.
struct Pets {
    kitten: Texture,
    puppy: Texture,
}

impl Pets {
    /// Loads both images and points the `texKitten`/`texPuppy` samplers at
    /// their units. `program` must be in use.
    fn load(gl: &Arc<glow::Context>, config: &Config, program: &ShaderProgram) -> Result<Self, String> {
        let kitten = Texture::load(gl, &config.image_path("kitten.png"))?;
        let puppy = Texture::load(gl, &config.image_path("puppy.png"))?;
        log::debug!(
            "Textures ready: kitten {}x{}, puppy {}x{}",
            kitten.width(),
            kitten.height(),
            puppy.width(),
            puppy.height()
        );

        program.set(&program.uniform("texKitten"), 0i32);
        program.set(&program.uniform("texPuppy"), 1i32);

        Ok(Self { kitten, puppy })
    }

    fn bind(&self) {
        self.kitten.bind(0);
        self.puppy.bind(1);
    }
}
