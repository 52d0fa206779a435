//! A small fake farm the demo hovers over: a tile grid of crops and
//! machines plus a few wandering critters, all addressed in screen pixels.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use hovertip::config::TriggerButton;
use hovertip::theme;
use hovertip::tooltip::{HoverWorld, ScreenId};

/// Default demo window width in pixels (tile layout assumes this)
pub const WINDOW_WIDTH: f32 = 1280.0;

/// Default demo window height in pixels
pub const WINDOW_HEIGHT: f32 = 720.0;

/// Edge length of one world tile in pixels
pub const TILE_SIZE: f32 = 64.0;

/// A planted crop occupying one tile
#[derive(Clone, Debug)]
pub struct CropTile {
    pub tile: IVec2,
    pub name: &'static str,
    pub days_left: u32,
    pub dead: bool,
    pub fertilized: bool,
}

/// A processing machine occupying one tile
#[derive(Clone, Debug)]
pub struct MachineTile {
    pub tile: IVec2,
    pub name: &'static str,
    pub minutes_left: u32,
}

/// A critter with a screen-space bounding box
#[derive(Clone, Debug)]
pub struct Critter {
    pub name: &'static str,
    pub species: &'static str,
    pub pos: Vec2,
    pub size: Vec2,
    /// Affection level, 0..=5
    pub hearts: u8,
}

impl Critter {
    pub fn bounding_box(&self) -> Rect {
        Rect::from_corners(self.pos, self.pos + self.size)
    }
}

/// The demo's world model. Input state is mirrored in from the window each
/// frame by [`sync_input`] so the hover queries stay snapshot-consistent.
#[derive(Resource)]
pub struct FarmWorld {
    pub cursor: Option<Vec2>,
    pub viewport: Vec2,
    pub held: Vec<TriggerButton>,
    pub player_free: bool,
    /// Reserved toolbar strip; tooltips are suppressed over it
    pub toolbar: Rect,
    pub crops: Vec<CropTile>,
    pub machines: Vec<MachineTile>,
    pub critters: Vec<Critter>,
}

impl Default for FarmWorld {
    fn default() -> Self {
        Self {
            cursor: None,
            viewport: Vec2::new(WINDOW_WIDTH, WINDOW_HEIGHT),
            held: Vec::new(),
            player_free: true,
            toolbar: toolbar_rect(Vec2::new(WINDOW_WIDTH, WINDOW_HEIGHT)),
            crops: vec![
                CropTile {
                    tile: IVec2::new(4, 3),
                    name: "Parsnip",
                    days_left: 3,
                    dead: false,
                    fertilized: false,
                },
                CropTile {
                    tile: IVec2::new(5, 3),
                    name: "Cauliflower",
                    days_left: 0,
                    dead: false,
                    fertilized: true,
                },
                CropTile {
                    tile: IVec2::new(6, 3),
                    name: "Ancient Fruit",
                    days_left: 12,
                    dead: true,
                    fertilized: false,
                },
            ],
            machines: vec![
                MachineTile {
                    tile: IVec2::new(9, 5),
                    name: "Furnace",
                    minutes_left: 40,
                },
                MachineTile {
                    tile: IVec2::new(10, 5),
                    name: "Preserves Jar",
                    minutes_left: 0,
                },
            ],
            critters: vec![
                Critter {
                    name: "Clementine",
                    species: "chicken",
                    pos: Vec2::new(832.0, 200.0),
                    size: Vec2::new(48.0, 48.0),
                    hearts: 4,
                },
                Critter {
                    name: "Biscuit",
                    species: "cow",
                    pos: Vec2::new(920.0, 320.0),
                    size: Vec2::new(80.0, 64.0),
                    hearts: 2,
                },
            ],
        }
    }
}

/// Toolbar strip centered at the bottom of the viewport
fn toolbar_rect(viewport: Vec2) -> Rect {
    Rect::new(
        viewport.x / 2.0 - 220.0,
        viewport.y - 56.0,
        viewport.x / 2.0 + 220.0,
        viewport.y,
    )
}

/// Tile containing a screen-space point
pub fn tile_at(cursor: Vec2) -> IVec2 {
    (cursor / TILE_SIZE).floor().as_ivec2()
}

impl HoverWorld for FarmWorld {
    type Terrain = CropTile;
    type Object = MachineTile;
    type Character = Critter;

    fn player_free(&self, _screen: ScreenId) -> bool {
        self.player_free
    }

    fn cursor(&self, _screen: ScreenId) -> Option<Vec2> {
        self.cursor
    }

    fn viewport(&self, _screen: ScreenId) -> Vec2 {
        self.viewport
    }

    fn cursor_over_reserved_ui(&self, _screen: ScreenId, cursor: Vec2) -> bool {
        self.toolbar.contains(cursor)
    }

    fn button_held(&self, _screen: ScreenId, button: TriggerButton) -> bool {
        self.held.contains(&button)
    }

    fn terrain_at(&self, _screen: ScreenId, cursor: Vec2) -> Vec<CropTile> {
        let tile = tile_at(cursor);
        self.crops.iter().filter(|c| c.tile == tile).cloned().collect()
    }

    fn objects_at(&self, _screen: ScreenId, cursor: Vec2) -> Vec<MachineTile> {
        let tile = tile_at(cursor);
        self.machines
            .iter()
            .filter(|m| m.tile == tile)
            .cloned()
            .collect()
    }

    fn characters_at(&self, _screen: ScreenId, cursor: Vec2) -> Vec<Critter> {
        self.critters
            .iter()
            .filter(|c| c.bounding_box().contains(cursor))
            .cloned()
            .collect()
    }
}

/// Mirror window and input state into the world once per frame
pub fn sync_input(
    window: Query<&Window, With<PrimaryWindow>>,
    mouse: Res<ButtonInput<MouseButton>>,
    keys: Res<ButtonInput<KeyCode>>,
    mut world: ResMut<FarmWorld>,
) {
    let Ok(window) = window.single() else {
        return;
    };

    world.viewport = Vec2::new(window.width(), window.height());
    world.toolbar = toolbar_rect(world.viewport);
    world.cursor = window.cursor_position();

    world.held.clear();
    if mouse.pressed(MouseButton::Left) {
        world.held.push(TriggerButton::MouseLeft);
    }
    if mouse.pressed(MouseButton::Right) {
        world.held.push(TriggerButton::MouseRight);
    }
    if mouse.pressed(MouseButton::Middle) {
        world.held.push(TriggerButton::MouseMiddle);
    }
    if keys.pressed(KeyCode::ShiftLeft) {
        world.held.push(TriggerButton::ShiftLeft);
    }
    if keys.pressed(KeyCode::ControlLeft) {
        world.held.push(TriggerButton::ControlLeft);
    }
    if keys.pressed(KeyCode::AltLeft) {
        world.held.push(TriggerButton::AltLeft);
    }
}

/// Screen-space point to 2D world coordinates for sprite placement
fn screen_to_world(point: Vec2) -> Vec3 {
    Vec3::new(
        point.x - WINDOW_WIDTH / 2.0,
        WINDOW_HEIGHT / 2.0 - point.y,
        0.0,
    )
}

/// Spawn the camera and a sprite per world entity so there is something
/// visible to hover
pub fn spawn_scene(mut commands: Commands, world: Res<FarmWorld>) {
    commands.spawn(Camera2d);

    for crop in &world.crops {
        let center = (crop.tile.as_vec2() + Vec2::splat(0.5)) * TILE_SIZE;
        commands.spawn((
            Sprite::from_color(theme::DEMO_CROP_TILE, Vec2::splat(TILE_SIZE - 4.0)),
            Transform::from_translation(screen_to_world(center)),
        ));
    }
    for machine in &world.machines {
        let center = (machine.tile.as_vec2() + Vec2::splat(0.5)) * TILE_SIZE;
        commands.spawn((
            Sprite::from_color(theme::DEMO_MACHINE_TILE, Vec2::splat(TILE_SIZE - 4.0)),
            Transform::from_translation(screen_to_world(center)),
        ));
    }
    for critter in &world.critters {
        commands.spawn((
            Sprite::from_color(theme::DEMO_CRITTER, critter.size),
            Transform::from_translation(screen_to_world(critter.pos + critter.size / 2.0)),
        ));
    }

    let toolbar = toolbar_rect(Vec2::new(WINDOW_WIDTH, WINDOW_HEIGHT));
    commands.spawn((
        Sprite::from_color(theme::DEMO_TOOLBAR, toolbar.size()),
        Transform::from_translation(screen_to_world(toolbar.center())),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_at_floors_toward_origin() {
        assert_eq!(tile_at(Vec2::new(0.0, 0.0)), IVec2::new(0, 0));
        assert_eq!(tile_at(Vec2::new(63.9, 63.9)), IVec2::new(0, 0));
        assert_eq!(tile_at(Vec2::new(64.0, 128.0)), IVec2::new(1, 2));
    }

    #[test]
    fn test_terrain_lookup_uses_tile_equality() {
        let world = FarmWorld::default();
        // center of tile (4, 3)
        let cursor = Vec2::new(4.5 * TILE_SIZE, 3.5 * TILE_SIZE);
        let hits = world.terrain_at(ScreenId::PRIMARY, cursor);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Parsnip");
    }

    #[test]
    fn test_character_lookup_uses_bounding_box() {
        let world = FarmWorld::default();
        let hits = world.characters_at(ScreenId::PRIMARY, Vec2::new(840.0, 210.0));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Clementine");

        let misses = world.characters_at(ScreenId::PRIMARY, Vec2::new(10.0, 10.0));
        assert!(misses.is_empty());
    }

    #[test]
    fn test_toolbar_is_reserved_ui() {
        let world = FarmWorld::default();
        let inside = Vec2::new(WINDOW_WIDTH / 2.0, WINDOW_HEIGHT - 10.0);
        assert!(world.cursor_over_reserved_ui(ScreenId::PRIMARY, inside));
        assert!(!world.cursor_over_reserved_ui(ScreenId::PRIMARY, Vec2::new(10.0, 10.0)));
    }
}
