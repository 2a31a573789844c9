//! Prints the positions of a light body swinging past a heavy one.
//!
//! Run with `RUST_LOG=debug` to see the world's own log output.

use rigid_sim::math::Vector3;
use rigid_sim::shapes::Aabb;
use rigid_sim::{Body, Mass, PhysicsWorld};

const TICKS: u32 = 255;

fn main() -> rigid_sim::Result<()> {
    env_logger::init();

    let mut world = PhysicsWorld::new();
    let heavy = world.add_body(
        Body::new(Vector3::zero(), Mass::new(350.0)?)
            .with_collider(Aabb::new(Vector3::zero(), 2.0, 3.0, 5.0)),
    );
    let light = world.add_body(
        Body::new(Vector3::new(10.0, 50.0, 30.0), Mass::new(5.0)?)
            .with_velocity(Vector3::new(1.0, 3.0, -6.0))
            .with_collider(Aabb::new(Vector3::zero(), 1.0, 1.0, 1.0)),
    );

    let start_heavy = world.get_body(heavy)?.get_position();
    let start_light = world.get_body(light)?.get_position();

    for _ in 0..TICKS {
        world.step();
        println!(
            "a: {}; b: {}",
            world.get_body(heavy)?.get_position(),
            world.get_body(light)?.get_position()
        );
    }

    let moved_heavy = world.get_body(heavy)?.get_position() - start_heavy;
    let moved_light = world.get_body(light)?.get_position() - start_light;
    println!("after {} ticks a moved {} and b moved {}", world.get_tick(), moved_heavy, moved_light);

    Ok(())
}
