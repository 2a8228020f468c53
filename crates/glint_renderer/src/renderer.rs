//! Core recursive ray tracer.
//!
//! Implements reflection tracing with:
//! - Nearest-hit search over every body in the scene
//! - Local shading blended with a recursively traced reflected ray
//! - Random diffusion of the mirror direction, drawn from an explicit generator
//! - A depth budget that bounds the recursion

use std::time::Instant;

use glint_core::RenderSettings;
use glint_math::{reflect, Color, Ray, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use rayon::prelude::*;

use crate::bucket::{generate_buckets, render_bucket, BucketResult};
use crate::{BodyId, Camera, Framebuffer, RenderResult, Scene};

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Maximum ray bounce depth
    pub max_depth: u32,
    /// Background color when ray doesn't hit anything
    pub background: Color,
    /// Seed for the per-pixel diffusion generators
    pub seed: u64,
    /// Whether to render buckets in parallel
    pub parallel: bool,
    /// Bucket edge length in pixels
    pub bucket_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::from(&RenderSettings::default())
    }
}

impl From<&RenderSettings> for RenderConfig {
    fn from(settings: &RenderSettings) -> Self {
        Self {
            max_depth: settings.max_depth,
            background: Color::from(settings.background),
            seed: settings.seed,
            parallel: settings.parallel,
            bucket_size: settings.bucket_size,
        }
    }
}

/// Compute the color seen by a ray.
///
/// `exclude` skips the body the ray is leaving, so a reflected ray can't
/// immediately re-hit its own surface. It only applies to this call; deeper
/// bounces may hit that body again. Every recursive call lowers `depth` by
/// one, and at zero the reflected share of the light is dropped.
///
/// The ray direction must be unit length.
pub fn trace(
    scene: &Scene,
    ray: &Ray,
    exclude: Option<BodyId>,
    depth: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let Some((id, body, hit)) = scene.nearest_hit(ray, exclude) else {
        return config.background;
    };

    let texture = body.texture();
    let reflectivity = texture.reflectivity();
    let local = texture.shade(ray, hit.normal) * (1.0 - reflectivity);

    if depth == 0 {
        return local;
    }

    let point = ray.at(hit.distance);
    let direction = diffuse(reflect(ray.direction(), hit.normal), texture.diffusivity(), rng);
    let reflected = Ray::new(point, direction);

    let bounced = trace(scene, &reflected, Some(id), depth - 1, config, rng);
    local + bounced * reflectivity
}

/// Perturb a mirror direction by a random offset with components in
/// `[0, diffusivity)` and renormalize it.
///
/// Falls back to the mirror direction if the offset cancels it out.
fn diffuse(mirror: Vec3, diffusivity: f32, rng: &mut dyn RngCore) -> Vec3 {
    let offset = Vec3::new(gen_f32(rng), gen_f32(rng), gen_f32(rng)) * diffusivity;
    let perturbed = mirror + offset;
    perturbed.try_normalize().unwrap_or_else(|| {
        log::warn!("Degenerate diffused direction {}, keeping the mirror direction", perturbed);
        mirror
    })
}

/// Uniform sample in [0, 1).
#[inline]
pub(crate) fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    rng.gen::<f32>()
}

/// Derive the generator seed for one pixel.
///
/// Each pixel gets its own stream, so the result doesn't depend on the order
/// or the thread pixels are rendered on.
pub fn pixel_seed(seed: u64, x: u32, y: u32) -> u64 {
    // SplitMix64 finalizer over the packed coordinates
    let mut z = seed ^ (((y as u64) << 32) | x as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Render a single pixel.
pub fn render_pixel(
    camera: &Camera,
    scene: &Scene,
    x: u32,
    y: u32,
    config: &RenderConfig,
) -> Color {
    let mut rng = StdRng::seed_from_u64(pixel_seed(config.seed, x, y));
    let ray = camera.ray_for_pixel(x, y);
    trace(scene, &ray, None, config.max_depth, config, &mut rng)
}

/// Render the entire scene to a framebuffer on the calling thread.
pub fn render_frame(
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
) -> RenderResult<Framebuffer> {
    let mut image = Framebuffer::new(camera.width(), camera.height())?;

    log::info!(
        "Rendering {}x{} ({} bodies, depth {})",
        camera.width(),
        camera.height(),
        scene.len(),
        config.max_depth
    );
    let start = Instant::now();

    for y in 0..camera.height() {
        for x in 0..camera.width() {
            let color = render_pixel(camera, scene, x, y, config);
            image.set(x, y, color);
        }
    }

    log::info!("Rendered in {:?}", start.elapsed());
    Ok(image)
}

/// Render the entire scene with buckets spread over the rayon thread pool.
///
/// Produces exactly the same image as [`render_frame`] for the same seed.
pub fn render_frame_parallel(
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
) -> RenderResult<Framebuffer> {
    let mut image = Framebuffer::new(camera.width(), camera.height())?;
    let buckets = generate_buckets(camera.width(), camera.height(), config.bucket_size);

    log::info!(
        "Rendering {}x{} in {} buckets on {} threads ({} bodies, depth {})",
        camera.width(),
        camera.height(),
        buckets.len(),
        rayon::current_num_threads(),
        scene.len(),
        config.max_depth
    );
    let start = Instant::now();

    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| BucketResult::new(*bucket, render_bucket(bucket, camera, scene, config)))
        .collect();

    for result in &results {
        image.write_bucket(&result.bucket, &result.pixels);
    }

    log::info!("Rendered in {:?}", start.elapsed());
    Ok(image)
}

/// Render with the strategy selected by `config.parallel`.
pub fn render(camera: &Camera, scene: &Scene, config: &RenderConfig) -> RenderResult<Framebuffer> {
    if config.parallel {
        render_frame_parallel(camera, scene, config)
    } else {
        render_frame(camera, scene, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Body, Texture};

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn forward_ray() -> Ray {
        Ray::new(Vec3::new(0.0, 0.0, -10.0), Vec3::Z)
    }

    fn sphere(center: Vec3, color: Color, reflectivity: f32, diffusivity: f32) -> Body {
        let texture = Texture::solid(color, reflectivity, diffusivity).unwrap();
        Body::sphere(center, 2.0, texture).unwrap()
    }

    fn floor(height: f32, color: Color, diffusivity: f32) -> Body {
        Body::floor(height, Texture::solid(color, 0.5, diffusivity).unwrap()).unwrap()
    }

    #[test]
    fn test_background_on_miss() {
        let config = RenderConfig::default();
        let scene = Scene::new();
        let color = trace(&scene, &forward_ray(), None, 10, &config, &mut rng());
        assert_eq!(color, Color::new(0.71, 0.784, 0.798));

        let config = RenderConfig {
            background: Color::new(0.1, 0.2, 0.3),
            ..Default::default()
        };
        let off_axis = sphere(Vec3::new(5.0, 5.0, 0.0), Color::WHITE, 0.5, 0.0);
        let scene = Scene::new().with_body(off_axis);
        let color = trace(&scene, &forward_ray(), None, 10, &config, &mut rng());
        assert_eq!(color, Color::new(0.1, 0.2, 0.3));
    }

    #[test]
    fn test_depth_zero_is_local_only() {
        let local = Color::new(0.9, 0.3, 0.6);
        for reflectivity in [0.01, 0.25, 0.5, 0.75, 0.99] {
            let scene = Scene::new().with_body(sphere(Vec3::ZERO, local, reflectivity, 0.3));
            let config = RenderConfig::default();
            let color = trace(&scene, &forward_ray(), None, 0, &config, &mut rng());
            assert_eq!(color, local * (1.0 - reflectivity));
        }
    }

    #[test]
    fn test_depth_zero_draws_no_randomness() {
        let scene = Scene::new().with_body(sphere(Vec3::ZERO, Color::WHITE, 0.5, 1.0));
        let mut used = rng();
        trace(&scene, &forward_ray(), None, 0, &RenderConfig::default(), &mut used);
        assert_eq!(used.next_u64(), rng().next_u64());
    }

    #[test]
    fn test_single_bounce_blends_background() {
        // Mirror sphere facing the camera: the reflection goes straight back
        // out to the background
        let config = RenderConfig::default();
        let local = Color::new(1.0, 0.0, 0.0);
        let scene = Scene::new().with_body(sphere(Vec3::ZERO, local, 0.25, 0.0));

        let color = trace(&scene, &forward_ray(), None, 5, &config, &mut rng());
        let expected = local * 0.75 + config.background * 0.25;
        assert!((color.to_vec3() - expected.to_vec3()).length() < 1e-6);
    }

    #[test]
    fn test_nearest_sphere_shades_pixel() {
        let config = RenderConfig::default();
        let near = || sphere(Vec3::new(0.0, 0.0, -3.0), Color::new(0.2, 0.9, 0.1), 0.4, 0.0);
        let far = sphere(Vec3::ZERO, Color::new(0.8, 0.1, 0.7), 0.6, 0.0);

        let near_only = Scene::new().with_body(near());
        let expected = trace(&near_only, &forward_ray(), None, 10, &config, &mut rng());

        let both = Scene::new().with_body(far).with_body(near());
        let color = trace(&both, &forward_ray(), None, 10, &config, &mut rng());
        assert_eq!(color, expected);
    }

    #[test]
    fn test_reflection_sees_other_body() {
        // Ray comes down onto a floor and bounces up into a white sphere
        let config = RenderConfig {
            background: Color::BLACK,
            ..Default::default()
        };
        let floor_color = Color::new(0.0, 0.0, 1.0);
        let scene = Scene::new()
            .with_body(Body::floor(0.0, Texture::solid(floor_color, 0.5, 0.0).unwrap()).unwrap())
            .with_body(sphere(Vec3::new(0.0, 10.0, 10.0), Color::WHITE, 0.01, 0.0));

        let ray = Ray::new(Vec3::new(0.0, 10.0, -10.0), Vec3::new(0.0, -1.0, 1.0));
        let color = trace(&scene, &ray, None, 1, &config, &mut rng());

        // floor * 0.5 + (white * 0.99) * 0.5
        let expected = Color::new(0.495, 0.495, 0.995);
        assert!((color.to_vec3() - expected.to_vec3()).length() < 1e-5, "{:?}", color);
    }

    #[test]
    fn test_exclude_skips_body_for_one_call() {
        let config = RenderConfig::default();
        let scene = Scene::new().with_body(sphere(Vec3::ZERO, Color::WHITE, 0.5, 0.0));

        let excluded = trace(&scene, &forward_ray(), Some(BodyId(0)), 3, &config, &mut rng());
        assert_eq!(excluded, config.background);

        let included = trace(&scene, &forward_ray(), None, 3, &config, &mut rng());
        assert_ne!(included, config.background);
    }

    #[test]
    fn test_exclusion_ends_after_one_bounce() {
        // Floor -> sphere -> back onto the same floor. The second floor hit
        // is two calls below the one that excluded it, so it must count.
        let config = RenderConfig {
            background: Color::BLACK,
            ..Default::default()
        };
        let blue = Texture::solid(Color::new(0.0, 0.0, 1.0), 0.5, 0.0).unwrap();
        let white = Texture::solid(Color::WHITE, 0.5, 0.0).unwrap();
        let scene = Scene::new()
            .with_body(Body::floor(0.0, blue).unwrap())
            .with_body(Body::sphere(Vec3::new(0.0, 5.0, 10.0), 1.0, white).unwrap());

        let ray = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.0, -1.0, 1.0));
        let color = trace(&scene, &ray, None, 2, &config, &mut rng());

        // sphere = 0.5 + 0.5 * floor_local, floor = floor_local + 0.5 * sphere
        let expected = Color::new(0.25, 0.25, 0.875);
        assert!((color.to_vec3() - expected.to_vec3()).length() < 1e-5, "{:?}", color);
    }

    #[test]
    fn test_trace_stays_in_range() {
        let config = RenderConfig::default();
        let scene = Scene::new()
            .with_body(sphere(Vec3::new(-2.0, 0.0, 4.0), Color::WHITE, 0.9, 0.5))
            .with_body(sphere(Vec3::new(2.0, 0.0, 4.0), Color::new(0.3, 1.0, 0.0), 0.7, 1.0))
            .with_body(floor(-2.0, Color::new(0.0, 0.1, 0.5), 0.2));

        let mut rng = rng();
        for i in 0..200 {
            let t = i as f32 * 0.1;
            let ray = Ray::new(Vec3::ZERO, Vec3::new(t.sin(), t.cos() - 0.5, 1.0));
            let c = trace(&scene, &ray, None, 20, &config, &mut rng);
            for ch in [c.r(), c.g(), c.b()] {
                assert!((0.0..=1.0).contains(&ch), "channel {} out of range", ch);
            }
        }
    }

    #[test]
    fn test_diffuse_renormalizes() {
        let mut rng = rng();
        for _ in 0..100 {
            let d = diffuse(Vec3::new(0.0, 0.6, 0.8), 1.0, &mut rng);
            assert!((d.length() - 1.0).abs() < 1e-5);
        }
        // No spread keeps the mirror direction
        let d = diffuse(Vec3::Y, 0.0, &mut rng);
        assert_eq!(d, Vec3::Y);
    }

    #[test]
    fn test_diffuse_offset_is_non_negative() {
        // Every offset component lies in [0, d), so the diffused vector never
        // leans toward negative x or z when the mirror direction is +Y
        let mut rng = rng();
        for _ in 0..100 {
            let d = diffuse(Vec3::Y, 0.5, &mut rng);
            assert!(d.x >= 0.0 && d.z >= 0.0 && d.y > 0.0);
        }
    }

    #[test]
    fn test_pixel_seed_distinct() {
        let mut seeds = std::collections::HashSet::new();
        for y in 0..32 {
            for x in 0..32 {
                assert!(seeds.insert(pixel_seed(7, x, y)));
            }
        }
        assert_ne!(pixel_seed(1, 0, 0), pixel_seed(2, 0, 0));
        assert_eq!(pixel_seed(3, 4, 5), pixel_seed(3, 4, 5));
    }

    fn test_scene() -> Scene {
        Scene::new()
            .with_body(sphere(Vec3::new(-1.5, 0.0, 6.0), Color::new(0.1, 0.8, 0.4), 0.7, 0.1))
            .with_body(sphere(Vec3::new(1.5, 0.5, 7.0), Color::new(0.9, 0.3, 0.9), 0.6, 0.2))
            .with_body(floor(-2.0, Color::new(0.0, 0.09, 0.5), 0.05))
    }

    #[test]
    fn test_render_is_reproducible() {
        let camera = Camera::new(24, 16, 60.0, Vec3::ZERO).unwrap();
        let config = RenderConfig {
            max_depth: 8,
            seed: 11,
            ..Default::default()
        };
        let scene = test_scene();

        let a = render_frame(&camera, &scene, &config).unwrap();
        let b = render_frame(&camera, &scene, &config).unwrap();
        assert_eq!(a.pixels(), b.pixels());
    }

    #[test]
    fn test_parallel_matches_serial() {
        let _ = env_logger::builder().is_test(true).try_init();

        let camera = Camera::new(37, 23, 60.0, Vec3::ZERO).unwrap();
        let config = RenderConfig {
            max_depth: 8,
            seed: 3,
            bucket_size: 8,
            ..Default::default()
        };
        let scene = test_scene();

        let serial = render_frame(&camera, &scene, &config).unwrap();
        let parallel = render_frame_parallel(&camera, &scene, &config).unwrap();
        assert_eq!(serial.pixels(), parallel.pixels());

        let dispatched = render(&camera, &scene, &config).unwrap();
        assert_eq!(serial.pixels(), dispatched.pixels());
    }

    #[test]
    fn test_render_pixel_hits_and_misses() {
        let camera = Camera::new(9, 9, 60.0, Vec3::ZERO).unwrap();
        let config = RenderConfig {
            max_depth: 0,
            ..Default::default()
        };
        let ahead = sphere(Vec3::new(0.0, 0.0, 10.0), Color::WHITE, 0.5, 0.0);
        let scene = Scene::new().with_body(ahead);

        // Center pixel hits the sphere, corner pixel sees background
        assert_eq!(render_pixel(&camera, &scene, 4, 4, &config), Color::WHITE * 0.5);
        assert_eq!(render_pixel(&camera, &scene, 0, 0, &config), config.background);
    }

    #[test]
    fn test_config_from_settings() {
        let config = RenderConfig::from(&RenderSettings::default());
        assert_eq!(config, RenderConfig::default());
    }
}
