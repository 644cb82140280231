use traversa_engine::World;

#[test]
fn smoke_actor_lands_on_floor() {
    let mut world = World::new();
    world.enable_perf_metrics(true);
    world.add_segment(-20.0, 0.0, 20.0, 0.0, 0);
    world.set_gravity(0.0, -0.2);

    let id = world.add_actor(-0.5, 3.0, 1.0, 1.0);
    for _ in 0..40 {
        world.step();
    }

    assert!(world.actor_below(id));
    assert!(world.actor_y(id).abs() < 0.02);
    assert_eq!(world.actor_velocity_y(id), 0.0);

    let stats = world.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert!(stats.rays_cast() > 0);
    assert_eq!(stats.actor_count(), 1);
}

#[test]
fn smoke_walks_into_wall() {
    let mut world = World::new();
    world.add_segment(-20.0, 0.0, 20.0, 0.0, 0);
    world.add_segment(5.0, 0.0, 5.0, 4.0, 0);
    world.set_gravity(0.0, -0.2);

    let id = world.add_actor(0.0, 0.0, 1.0, 1.0);
    for _ in 0..60 {
        world.set_actor_velocity(id, 0.25, world.actor_velocity_y(id));
        world.step();
    }

    // Stopped at the wall, still grounded
    assert!(world.actor_right(id));
    assert!(world.actor_below(id));
    assert!(world.actor_x(id) + 1.0 <= 5.0 + 0.001);
    assert!(world.actor_x(id) + 1.0 >= 5.0 - 0.05);
}

#[test]
fn smoke_out_of_range_layer_segment_never_blocks() {
    let mut world = World::new();
    // Only bits 0..31 exist; a layer-32 surface is inert, not a trap
    world.add_segment(-20.0, 1.0, 20.0, 1.0, 32);
    world.add_segment(-20.0, 0.0, 20.0, 0.0, 0);
    world.set_gravity(0.0, -0.2);

    let id = world.add_actor(-0.5, 3.0, 1.0, 1.0);
    for _ in 0..40 {
        world.step();
    }

    // Fell straight through the inert surface to the real floor
    assert!(world.actor_below(id));
    assert!(world.actor_y(id).abs() < 0.02);
}
