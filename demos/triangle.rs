//! A colored triangle spinning around the z-axis, driven by the `RotationMatrix`
//! uniform.

use glsandbox::prelude::*;
use log::error;

const POSITION: u32 = 0;
const COLOR: u32 = 1;

struct Triangle {
    program: Program,
    vao: VertexArray,
    // Owned so the GPU buffers outlive the vertex array referencing them.
    _buffers: [VertexBuffer; 2],
    angle: Deg<f32>,
    speed: Deg<f32>,
}

impl Triangle {
    fn new(ctx: &Context) -> Result<Self> {
        ctx.require_capabilities()?;

        let mut program = Program::new()?;
        program.compile_shader_file(concat!(env!("CARGO_MANIFEST_DIR"), "/demos/shaders/basic.vert"))?;
        program.compile_shader_file(concat!(env!("CARGO_MANIFEST_DIR"), "/demos/shaders/basic.frag"))?;
        program.bind_attrib_location(POSITION, "a_Position")?;
        program.bind_attrib_location(COLOR, "a_Color")?;
        program.bind_frag_data_location(0, "o_FragColor")?;
        program.link()?;
        program.validate()?;

        let positions = VertexBuffer::new(&geometry::TRIANGLE_POSITIONS)?;
        let colors = VertexBuffer::new(&geometry::TRIANGLE_COLORS)?;

        let vao = VertexArray::new()?;
        vao.attribute(POSITION, &positions, geometry::COMPONENTS as u8)?;
        vao.attribute(COLOR, &colors, geometry::COMPONENTS as u8)?;

        Ok(Triangle {
            program,
            vao,
            _buffers: [positions, colors],
            angle: Deg(0.0),
            speed: Deg(90.0),
        })
    }
}

impl Application for Triangle {
    fn on_update(&mut self, ctx: &mut Context) -> Result<()> {
        self.angle = (self.angle + self.speed * ctx.time.frame_secs()).normalize();

        if ctx.time.frames() % 60 == 0 {
            let title = format!("Triangle ({} fps)", ctx.time.fps());
            ctx.window.set_title(&title);
        }

        Ok(())
    }

    fn on_render(&mut self, _: &mut Context) -> Result<()> {
        video::clear([0.1, 0.1, 0.1, 1.0], None)?;

        self.program.bind();
        self.program
            .set_uniform("RotationMatrix", Matrix4::from_angle_z(self.angle))?;

        self.vao.draw(
            Primitive::Triangles,
            0,
            geometry::vertex_count(&geometry::TRIANGLE_POSITIONS),
        )?;

        Ok(())
    }
}

fn run() -> Result<()> {
    let settings = Settings::from_args()?;
    let mut engine = Engine::new(&settings)?;
    let triangle = Triangle::new(engine.context())?;
    engine.run(triangle)
}

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        for cause in err.iter_chain() {
            error!("{}", cause);
        }

        std::process::exit(1);
    }
}
