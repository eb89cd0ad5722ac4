//! End-to-end interpreter scenarios with mock collaborators
//! Run with: cargo test --test interpreter_test

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

use veggie_bot::application::errors::MenuLookupError;
use veggie_bot::application::messaging::formatter::NO_MATCHES;
use veggie_bot::application::messaging::RequestInterpreter;
use veggie_bot::domain::entities::{InboundMessage, Menu, MenuItem, Region};
use veggie_bot::domain::traits::{MenuSource, RegionLookup};

struct MockRegions {
    regions: HashMap<String, Region>,
}

impl MockRegions {
    fn empty() -> Self {
        Self {
            regions: HashMap::new(),
        }
    }

    fn with(mut self, code: &str, city: &str, state: &str) -> Self {
        self.regions
            .insert(code.to_string(), Region::new(city, state));
        self
    }
}

#[async_trait]
impl RegionLookup for MockRegions {
    async fn lookup(&self, area_code: &str) -> Option<Region> {
        self.regions.get(area_code).cloned()
    }
}

/// Menu collaborator scripted with one fixed outcome
enum MockMenus {
    Menu(Menu),
    NotFound,
    Unavailable,
}

#[async_trait]
impl MenuSource for MockMenus {
    async fn lookup(&self, name: &str, _city: &str, _state: &str) -> Result<Menu, MenuLookupError> {
        match self {
            MockMenus::Menu(menu) => Ok(menu.clone()),
            MockMenus::NotFound => Err(MenuLookupError::NotFound(name.to_string())),
            MockMenus::Unavailable => {
                Err(MenuLookupError::Unavailable("connection refused".to_string()))
            }
        }
    }
}

fn joes_menu() -> Menu {
    let mut menu = Menu::new("Joe's Diner").with_address("123 Main St");
    menu.push(MenuItem::new("Veggie Burger", true));
    menu.push(MenuItem::new("Steak", false));
    menu
}

fn interpreter(regions: MockRegions, menus: MockMenus) -> RequestInterpreter {
    RequestInterpreter::new(Arc::new(regions), Arc::new(menus))
}

#[tokio::test]
async fn replies_with_vegetarian_items_only() {
    let interpreter = interpreter(MockRegions::empty(), MockMenus::Menu(joes_menu()));
    let message = InboundMessage::new("+14155551234", "Joe's Diner @ Berkeley, CA");

    let reply = interpreter.handle(&message).await;
    assert!(reply.body.contains("Veggie Burger"));
    assert!(!reply.body.contains("Steak"));
}

#[tokio::test]
async fn resolves_location_from_area_code() {
    let regions = MockRegions::empty().with("415", "San Francisco", "CA");
    let interpreter = interpreter(regions, MockMenus::Menu(joes_menu()));
    let message = InboundMessage::new("+14155551234", "Joe's Diner");

    let reply = interpreter.handle(&message).await;
    assert!(reply.body.contains("Veggie Burger"));
}

#[tokio::test]
async fn unknown_restaurant_gets_not_found_reply() {
    let regions = MockRegions::empty().with("415", "San Francisco", "CA");
    let interpreter = interpreter(regions, MockMenus::NotFound);
    let message = InboundMessage::new("+14155551234", "Unknown Place");

    let reply = interpreter.handle(&message).await;
    assert!(reply.body.contains("No Results Found"));
}

#[tokio::test]
async fn unresolved_location_gets_location_reply() {
    let interpreter = interpreter(MockRegions::empty(), MockMenus::Menu(joes_menu()));
    let message = InboundMessage::new("+19995551234", "Joe's Diner");

    let reply = interpreter.handle(&message).await;
    assert!(reply.body.contains("couldn't determine your location"));
}

#[tokio::test]
async fn default_region_stands_in_for_unmapped_area_code() {
    let interpreter = interpreter(MockRegions::empty(), MockMenus::Menu(joes_menu()))
        .with_default_region(Region::new("Irvine", "CA"));
    let message = InboundMessage::new("+19495551234", "Joe's Diner");

    let reply = interpreter.handle(&message).await;
    assert!(reply.body.contains("Veggie Burger"));
}

#[tokio::test]
async fn upstream_fault_gets_try_later_reply() {
    let interpreter = interpreter(MockRegions::empty(), MockMenus::Unavailable);
    let message = InboundMessage::new("+14155551234", "Joe's Diner @ Berkeley, CA");

    let reply = interpreter.handle(&message).await;
    assert!(reply.body.contains("try again later"));
}

#[tokio::test]
async fn empty_body_gets_usage_reply() {
    let interpreter = interpreter(MockRegions::empty(), MockMenus::Menu(joes_menu()));
    let message = InboundMessage::new("+14155551234", "   ");

    let reply = interpreter.handle(&message).await;
    assert!(reply.body.contains("restaurant name"));
}

#[tokio::test]
async fn menu_without_items_gets_no_menu_reply() {
    let menu = Menu::new("Joe's Diner").with_address("123 Main St");
    let interpreter = interpreter(MockRegions::empty(), MockMenus::Menu(menu));
    let message = InboundMessage::new("+14155551234", "Joe's Diner @ Berkeley, CA");

    let reply = interpreter.handle(&message).await;
    assert!(reply.body.contains("does not have a menu"));
    assert!(reply.body.contains("123 Main St"));
}

#[tokio::test]
async fn menu_without_vegetarian_items_gets_fixed_reply() {
    let mut menu = Menu::new("Steakhouse");
    menu.push(MenuItem::new("Ribeye", false));
    menu.push(MenuItem::new("T-Bone", false));
    let interpreter = interpreter(MockRegions::empty(), MockMenus::Menu(menu));
    let message = InboundMessage::new("+14155551234", "Steakhouse @ Dallas, TX");

    let reply = interpreter.handle(&message).await;
    assert_eq!(reply.body, NO_MATCHES);
}
