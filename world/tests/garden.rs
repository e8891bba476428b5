use cube_garden_core::{
    Age, BounceBehavior, Bounds, Color, Controller, ControllerModifiers, Direction, Entity,
    EntityId, InputEvent, KeyPhase, Movement, PaintSurface, Position, Renderable, TickClock,
    Velocity,
};
use cube_garden_system_aging::AgingSystem;
use cube_garden_system_controller::KeyboardControllerSystem;
use cube_garden_system_movement::MovementSystem;
use cube_garden_system_render::RenderSystem;
use cube_garden_world::{query, World};

#[derive(Debug, Default)]
struct RecordingSurface {
    squares: Vec<(f32, f32, f32, Color)>,
}

impl PaintSurface for RecordingSurface {
    fn fill_square(&mut self, x: f32, y: f32, size: f32, color: Color) {
        self.squares.push((x, y, size, color));
    }
}

const PINK: Color = Color::from_rgb(0xff, 0xc0, 0xcb);

fn garden() -> (World, EntityId) {
    let mut world = World::new();
    world.add_system(KeyboardControllerSystem::default());
    world.add_system(MovementSystem::new());
    world.add_system(AgingSystem::new());
    world.add_system(RenderSystem::new());

    let player = world.add_entity(
        Entity::builder()
            .with(Position::new(20.0, 20.0))
            .with(Velocity::new(0.0, 0.0))
            .with(Renderable::new(PINK, 10.0))
            .with(Age::default())
            .with(Movement::new(BounceBehavior::default()))
            .with(Controller::new(
                ControllerModifiers::new().with(KeyPhase::Press, Direction::Right, 4.0),
            )),
    );
    (world, player)
}

#[test]
fn controller_movement_and_render_share_one_tick() {
    let (mut world, player) = garden();
    let mut clock = TickClock::new();
    let bounds = Bounds::new(100.0, 100.0);

    world.ingest(&InputEvent::KeyDown("ArrowRight".to_owned()));
    let mut surface = RecordingSurface::default();
    world.update(clock.tick(0.0), bounds, &mut surface);

    assert_eq!(surface.squares, vec![(24.0, 20.0, 10.0, PINK)]);

    let mut surface = RecordingSurface::default();
    world.update(clock.tick(16.0), bounds, &mut surface);

    assert_eq!(surface.squares, vec![(28.0, 20.0, 10.0, PINK)]);
    let entity = query::entity(&world, player).expect("player exists");
    assert_eq!(entity.get::<Velocity>(), Some(&Velocity::new(4.0, 0.0)));
    assert_eq!(entity.get::<Age>(), Some(&Age::new(2, 16.0)));
}

#[test]
fn despawned_entities_stop_painting() {
    let (mut world, player) = garden();
    let mut clock = TickClock::new();
    let bounds = Bounds::new(100.0, 100.0);

    let removed = world.despawn(player).expect("player exists");
    assert_eq!(removed.get::<Renderable>(), Some(&Renderable::new(PINK, 10.0)));

    let mut surface = RecordingSurface::default();
    world.update(clock.tick(0.0), bounds, &mut surface);

    assert!(surface.squares.is_empty());
    assert_eq!(query::tick_index(&world), 1);
}

#[test]
fn cube_stays_inside_bounds_over_many_ticks() {
    let mut world = World::new();
    world.add_system(MovementSystem::new());
    world.add_system(RenderSystem::new());
    let _ = world.add_entity(
        Entity::builder()
            .with(Position::new(0.0, 0.0))
            .with(Velocity::new(3.0, 7.0))
            .with(Renderable::new(PINK, 10.0))
            .with(Movement::new(BounceBehavior::new(0.0))),
    );
    let bounds = Bounds::new(64.0, 48.0);
    let mut clock = TickClock::new();

    for frame in 0..1_000 {
        let mut surface = RecordingSurface::default();
        world.update(clock.tick(f64::from(frame) * 16.0), bounds, &mut surface);
        let (x, y, size, _) = surface.squares[0];
        assert!((0.0..=bounds.width - size).contains(&x), "x escaped: {x}");
        assert!((0.0..=bounds.height - size).contains(&y), "y escaped: {y}");
    }
}
