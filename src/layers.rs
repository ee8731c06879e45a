use avian2d::prelude::*;

/// Body categories used for collision filtering and contact scoring.
#[derive(PhysicsLayer, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameLayer {
    Bird,
    Brick,
    Box,
    Boundary,
}

impl GameLayer {
    pub fn bird() -> CollisionLayers {
        CollisionLayers::new(GameLayer::Bird, [GameLayer::Box, GameLayer::Brick, GameLayer::Boundary])
    }

    pub fn brick() -> CollisionLayers {
        CollisionLayers::new(GameLayer::Brick, LayerMask::ALL)
    }

    pub fn boxes() -> CollisionLayers {
        CollisionLayers::new(GameLayer::Box, LayerMask::ALL)
    }

    pub fn boundary() -> CollisionLayers {
        CollisionLayers::new(GameLayer::Boundary, LayerMask::ALL)
    }
}

/// True when the layers belong to exactly the bird category.
pub fn is_bird(layers: &CollisionLayers) -> bool {
    layers.memberships == LayerMask::from(GameLayer::Bird)
}
