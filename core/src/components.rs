use std::fmt;

use crate::{Color, ControllerModifiers, MovementBehavior};

/// Type tag identifying a component variant.
///
/// An entity stores at most one component per tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComponentKind {
    /// Tag of [`Position`].
    Position,
    /// Tag of [`Velocity`].
    Velocity,
    /// Tag of [`Renderable`].
    Renderable,
    /// Tag of [`Age`].
    Age,
    /// Tag of [`Movement`].
    Movement,
    /// Tag of [`Controller`].
    Controller,
}

impl ComponentKind {
    /// Every component tag.
    pub const ALL: [ComponentKind; 6] = [
        Self::Position,
        Self::Velocity,
        Self::Renderable,
        Self::Age,
        Self::Movement,
        Self::Controller,
    ];

    /// Lower-case name of the tag.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Position => "position",
            Self::Velocity => "velocity",
            Self::Renderable => "renderable",
            Self::Age => "age",
            Self::Movement => "movement",
            Self::Controller => "controller",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Location of an entity's top-left corner in surface units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate, growing downward.
    pub y: f32,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Displacement applied to a position per tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Velocity {
    /// Horizontal displacement per tick.
    pub x: f32,
    /// Vertical displacement per tick.
    pub y: f32,
}

impl Velocity {
    /// Creates a new velocity.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Appearance of an entity drawn as a filled square.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Renderable {
    /// Fill colour.
    pub color: Color,
    /// Edge length of the square.
    pub size: f32,
}

impl Renderable {
    /// Creates a new renderable square.
    #[must_use]
    pub const fn new(color: Color, size: f32) -> Self {
        Self { color, size }
    }
}

/// How long an entity has existed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Age {
    /// Number of ticks lived.
    pub age: u64,
    /// Milliseconds lived, summed from tick deltas.
    pub real_age: f64,
}

impl Age {
    /// Creates an age record.
    #[must_use]
    pub const fn new(age: u64, real_age: f64) -> Self {
        Self { age, real_age }
    }
}

/// Holds the movement strategy applied to an entity every tick.
#[derive(Clone, Debug, PartialEq)]
pub struct Movement {
    /// Strategy driving the entity's position and velocity.
    pub behavior: MovementBehavior,
}

impl Movement {
    /// Wraps a behavior into a movement component.
    #[must_use]
    pub fn new(behavior: impl Into<MovementBehavior>) -> Self {
        Self {
            behavior: behavior.into(),
        }
    }
}

/// Marks an entity as keyboard controlled and describes how input moves it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Controller {
    /// Velocity deltas applied per key phase and direction.
    pub modifiers: ControllerModifiers,
}

impl Controller {
    /// Creates a controller from a modifier map.
    #[must_use]
    pub const fn new(modifiers: ControllerModifiers) -> Self {
        Self { modifiers }
    }
}

/// Closed set of component variants an entity may hold.
#[derive(Clone, Debug, PartialEq)]
pub enum Component {
    /// See [`Position`].
    Position(Position),
    /// See [`Velocity`].
    Velocity(Velocity),
    /// See [`Renderable`].
    Renderable(Renderable),
    /// See [`Age`].
    Age(Age),
    /// See [`Movement`].
    Movement(Movement),
    /// See [`Controller`].
    Controller(Controller),
}

impl Component {
    /// Type tag of the component.
    #[must_use]
    pub const fn kind(&self) -> ComponentKind {
        match self {
            Self::Position(_) => ComponentKind::Position,
            Self::Velocity(_) => ComponentKind::Velocity,
            Self::Renderable(_) => ComponentKind::Renderable,
            Self::Age(_) => ComponentKind::Age,
            Self::Movement(_) => ComponentKind::Movement,
            Self::Controller(_) => ComponentKind::Controller,
        }
    }
}

/// Concrete component types that can be borrowed out of a [`Component`].
pub trait ComponentData: Into<Component> {
    /// Tag under which the component is stored.
    const KIND: ComponentKind;

    /// Borrows the concrete component when the variant matches.
    fn from_component(component: &Component) -> Option<&Self>;

    /// Mutably borrows the concrete component when the variant matches.
    fn from_component_mut(component: &mut Component) -> Option<&mut Self>;
}

macro_rules! component_data {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Component {
                fn from(component: $variant) -> Self {
                    Self::$variant(component)
                }
            }

            impl ComponentData for $variant {
                const KIND: ComponentKind = ComponentKind::$variant;

                fn from_component(component: &Component) -> Option<&Self> {
                    match component {
                        Component::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }

                fn from_component_mut(component: &mut Component) -> Option<&mut Self> {
                    match component {
                        Component::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }
            }
        )*
    };
}

component_data!(Position, Velocity, Renderable, Age, Movement, Controller);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BounceBehavior;

    #[test]
    fn component_kind_matches_variant() {
        let components: [Component; 6] = [
            Position::new(1.0, 2.0).into(),
            Velocity::new(3.0, 4.0).into(),
            Renderable::new(Color::from_rgb(0, 128, 0), 10.0).into(),
            Age::default().into(),
            Movement::new(BounceBehavior::default()).into(),
            Controller::default().into(),
        ];

        for (component, kind) in components.iter().zip(ComponentKind::ALL) {
            assert_eq!(component.kind(), kind);
        }
    }

    #[test]
    fn typed_borrow_rejects_other_variants() {
        let mut component = Component::from(Velocity::new(1.0, 1.0));
        assert!(Position::from_component(&component).is_none());

        let velocity = Velocity::from_component_mut(&mut component).expect("velocity variant");
        velocity.x = 7.0;
        assert_eq!(component, Component::Velocity(Velocity::new(7.0, 1.0)));
    }

    #[test]
    fn tags_are_lower_case_names() {
        assert_eq!(ComponentKind::Movement.tag(), "movement");
        assert_eq!(ComponentKind::Controller.to_string(), "controller");
    }
}
