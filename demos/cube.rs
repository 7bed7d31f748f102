//! A diffuse and specular lit cube. WASD moves the camera, Space and LShift move it
//! up and down, the mouse looks around and the wheel zooms. Tab toggles the cursor
//! grab.

use glsandbox::prelude::*;
use log::{error, info};

const POSITION: u32 = 0;
const NORMAL: u32 = 1;

struct Cube {
    program: Program,
    vao: VertexArray,
    // Owned so the GPU buffers outlive the vertex array referencing them.
    _buffers: [VertexBuffer; 2],
    camera: Camera,
    angle: Deg<f32>,
}

impl Cube {
    fn new(ctx: &mut Context, settings: &Settings) -> Result<Self> {
        let capabilities = ctx.require_capabilities()?.clone();

        let mut program = Program::new()?;
        program.compile_shader_file(concat!(env!("CARGO_MANIFEST_DIR"), "/demos/shaders/lit.vert"))?;
        program.compile_shader_file(concat!(env!("CARGO_MANIFEST_DIR"), "/demos/shaders/lit.frag"))?;
        program.bind_attrib_location(POSITION, "a_Position")?;
        program.bind_attrib_location(NORMAL, "a_Normal")?;
        program.bind_frag_data_location(0, "o_FragColor")?;
        program.link()?;
        program.validate()?;

        info!("Program {} is linked.", program.handle());
        program.print_active_uniforms(&capabilities)?;
        program.print_active_attributes(&capabilities)?;

        let positions = VertexBuffer::new(&geometry::CUBE_POSITIONS)?;
        let normals = VertexBuffer::new(&geometry::CUBE_NORMALS)?;

        let vao = VertexArray::new()?;
        vao.attribute(POSITION, &positions, geometry::COMPONENTS as u8)?;
        vao.attribute(NORMAL, &normals, geometry::COMPONENTS as u8)?;

        video::set_depth_test(true)?;
        ctx.window.set_cursor_grab(true)?;

        Ok(Cube {
            program,
            vao,
            _buffers: [positions, normals],
            camera: Camera::new(settings.camera)?,
            angle: Deg(0.0),
        })
    }
}

impl Application for Cube {
    fn on_update(&mut self, ctx: &mut Context) -> Result<()> {
        if ctx.input.is_key_press(Key::Tab) {
            let grab = !ctx.window.is_cursor_grabbed();
            ctx.window.set_cursor_grab(grab)?;
        }

        let dt = ctx.time.frame_secs();
        self.camera.translate(Movement::from_input(&ctx.input), dt);

        if ctx.window.is_cursor_grabbed() {
            let motion = ctx.input.mouse_motion();
            self.camera.rotate(motion.x, motion.y);
        }

        self.camera.zoom(ctx.input.mouse_scroll().y);
        self.angle = (self.angle + Deg(20.0) * dt).normalize();
        Ok(())
    }

    fn on_render(&mut self, ctx: &mut Context) -> Result<()> {
        video::clear([0.05, 0.05, 0.08, 1.0], Some(1.0))?;

        let model = Matrix4::from_angle_y(self.angle);
        let normal_matrix = Matrix3::from_angle_y(self.angle);

        self.program.bind();
        self.program.set_uniform("u_Model", model)?;
        self.program.set_uniform("u_View", self.camera.view_matrix())?;
        self.program
            .set_uniform("u_Projection", self.camera.projection_matrix(ctx.aspect()))?;
        self.program.set_uniform("u_NormalMatrix", normal_matrix)?;
        self.program.set_uniform("u_LightPosition", [1.2f32, 1.0, 2.0])?;
        self.program.set_uniform("u_LightColor", Vector3::new(1.0f32, 1.0, 1.0))?;
        self.program.set_uniform("u_ObjectColor", (1.0f32, 0.5, 0.31))?;
        self.program.set_uniform("u_ViewPosition", self.camera.position())?;
        self.program.set_uniform("u_Ambient", 0.1f32)?;
        self.program.set_uniform("u_Shininess", 32.0f32)?;

        self.vao.draw(
            Primitive::Triangles,
            0,
            geometry::vertex_count(&geometry::CUBE_POSITIONS),
        )?;

        Ok(())
    }

    fn on_exit(&mut self, ctx: &mut Context) -> Result<()> {
        ctx.window.set_cursor_grab(false)
    }
}

fn run() -> Result<()> {
    let settings = Settings::from_args()?;

    let mut engine = Engine::new(&settings)?;
    let cube = Cube::new(engine.context(), &settings)?;
    engine.run(cube)
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
