//! Simple path tracer example.
//!
//! Renders a small scene exercising every material variant and saves a PNG.
//! Textures, materials, and primitives are built as locals in scene order;
//! the composite tester only borrows them.

use anyhow::Context;
use ember_renderer::{
    render_parallel, Camera, Checker, Color, Dielectric, DiffuseLight, HittableList, Lambertian,
    Metal, MovingSphere, RenderConfig, SolidColor, Sphere, Vec3,
};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Textures first, then materials borrowing them, then primitives.
    let white = SolidColor::new(Color::new(0.9, 0.9, 0.9));
    let green = SolidColor::new(Color::new(0.2, 0.4, 0.2));
    let ground_tex = Checker::new(3.0, &white, &green);
    let brown = SolidColor::new(Color::new(0.4, 0.2, 0.1));
    let steel = SolidColor::new(Color::new(0.7, 0.6, 0.5));
    let lamp = SolidColor::new(Color::new(6.0, 5.5, 5.0));
    let orange = SolidColor::new(Color::new(0.9, 0.5, 0.1));

    let ground = Sphere::new(
        Vec3::new(0.0, -1000.0, 0.0),
        1000.0,
        Lambertian::new(&ground_tex),
    );
    let glass = Sphere::new(Vec3::new(0.0, 1.0, 0.0), 1.0, Dielectric::new(1.5));
    let diffuse = Sphere::new(Vec3::new(-4.0, 1.0, 0.0), 1.0, Lambertian::new(&brown));
    let metal = Sphere::new(Vec3::new(4.0, 1.0, 0.0), 1.0, Metal::new(&steel, 0.1));
    let light = Sphere::new(Vec3::new(0.0, 6.0, 3.0), 1.5, DiffuseLight::new(&lamp));
    let bouncer = MovingSphere::new(
        Vec3::new(2.0, 0.4, 2.0),
        Vec3::new(2.0, 0.8, 2.0),
        0.0,
        1.0,
        0.4,
        Lambertian::new(&orange),
    );

    let mut world = HittableList::new();
    world.add(&ground);
    world.add(&glass);
    world.add(&diffuse);
    world.add(&metal);
    world.add(&light);
    world.add(&bouncer);

    let mut camera = Camera::new()
        .with_resolution(800, 450)
        .with_position(
            Vec3::new(13.0, 2.0, 3.0),
            Vec3::new(0.0, 0.5, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        )
        .with_lens(20.0, 0.3, 10.0)
        .with_shutter(0.0, 1.0);
    camera.initialize();

    let config = RenderConfig {
        samples_per_pixel: 100,
        max_depth: 20,
        background: Color::new(0.04, 0.05, 0.08),
        use_sky_gradient: false,
    };

    log::info!(
        "rendering {}x{} with {} objects",
        camera.image_width,
        camera.image_height,
        world.len()
    );

    let start = std::time::Instant::now();
    let image = render_parallel(&camera, &world, &config, 42);
    log::info!("render finished in {:?}", start.elapsed());

    let filename = "output.png";
    image::save_buffer(
        filename,
        &image.to_rgba(),
        image.width,
        image.height,
        image::ColorType::Rgba8,
    )
    .with_context(|| format!("saving {filename}"))?;
    log::info!("saved {filename}");

    Ok(())
}
