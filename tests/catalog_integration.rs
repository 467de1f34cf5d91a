// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for the device catalog public API.

use home_devices::catalog;
use home_devices::types::{Icon, IconStyle, PowerRating};
use home_devices::{Catalog, Error, HomeDevice, devices, kilowatt_draw, pool};

// ============================================================================
// Kilowatt Draw
// ============================================================================

mod kilowatt {
    use super::*;

    #[test]
    fn every_pool_record_divides_by_thousand() {
        for device in pool() {
            let expected = device.power_rating().watts() / 1000.0;
            assert!(
                kilowatt_draw(&device).to_bits() == expected.to_bits(),
                "{} should draw exactly {expected} kW",
                device.name()
            );
        }
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn known_values() {
        assert_eq!(kilowatt_draw(&catalog::microwave()), 1.5);
        assert_eq!(kilowatt_draw(&catalog::tv()), 0.1);
        assert_eq!(kilowatt_draw(&catalog::fridge()), 0.2);
        assert_eq!(kilowatt_draw(&catalog::laptop()), 0.05);
        assert_eq!(kilowatt_draw(&catalog::washing_machine()), 1.0);
        assert_eq!(kilowatt_draw(&catalog::bulb()), 0.06);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn zero_rating_draws_nothing() {
        let device = HomeDevice::new("Standby", PowerRating::ZERO, Icon::TV);
        assert_eq!(kilowatt_draw(&device), 0.0);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn repeated_calls_do_not_mutate() {
        let device = catalog::microwave();
        let snapshot = device.clone();
        assert_eq!(kilowatt_draw(&device), kilowatt_draw(&device));
        assert_eq!(device, snapshot);
    }
}

// ============================================================================
// Active Catalog
// ============================================================================

mod active_catalog {
    use super::*;

    #[test]
    fn holds_tv_laptop_bulb_in_order() {
        let catalog = devices();
        let names: Vec<_> = catalog.iter().map(HomeDevice::name).collect();
        assert_eq!(names, ["TV", "Laptop", "Bulb"]);
    }

    #[test]
    fn records_match_pool() {
        let pool = pool();
        for device in &devices() {
            let pooled = pool
                .iter()
                .find(|p| p.name() == device.name())
                .expect("active device must exist in pool");
            assert_eq!(pooled, device);
        }
    }

    #[test]
    fn everything_starts_off() {
        assert!(devices().iter().all(|d| !d.is_on()));
        assert!(pool().iter().all(|d| !d.is_on()));
    }

    #[test]
    fn consumer_toggles_state() {
        let mut catalog = Catalog::new();
        let bulb = catalog.find_mut("Bulb").unwrap();
        bulb.toggle();
        assert_eq!(bulb.icon_style(), IconStyle::Solid);

        assert!(catalog.find("Bulb").unwrap().is_on());
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn fresh_catalogs_are_independent() {
        let mut first = Catalog::new();
        first.get_mut(0).unwrap().set_on(true);
        assert!(!Catalog::new().get(0).unwrap().is_on());
    }
}

// ============================================================================
// Curation and JSON
// ============================================================================

mod curation {
    use super::*;

    #[test]
    fn curate_kitchen() {
        let kitchen = Catalog::from_names(&["Fridge", "Microwave"]).unwrap();
        assert!((kitchen.total_rated_kw() - 1.7).abs() < 1e-12);
    }

    #[test]
    fn unknown_name_is_reported() {
        let err = Catalog::from_names(&["Dishwasher"]).unwrap_err();
        assert!(matches!(err, Error::DeviceNotFound(_)));
        assert_eq!(err.to_string(), "device not found: Dishwasher");
    }

    #[test]
    fn load_json_from_presentation_layer() {
        let json = r#"[
            {"powerRating": 1000, "name": "Washing Machine", "icon": "washing-machine", "isOn": true},
            {"powerRating": 60, "name": "Bulb", "icon": "lightbulb", "isOn": false}
        ]"#;
        let catalog = Catalog::from_json(json).unwrap();

        assert_eq!(catalog.len(), 2);
        let washer = catalog.get(0).unwrap();
        assert_eq!(washer.icon(), &Icon::WASHING_MACHINE);
        assert!(washer.is_on());
        assert!((catalog.active_draw_kw() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn load_json_missing_field() {
        let json = r#"[{"powerRating": 60, "name": "Bulb", "icon": "lightbulb"}]"#;
        assert!(matches!(Catalog::from_json(json), Err(Error::Parse(_))));
    }

    #[test]
    fn load_json_with_custom_icon() {
        let json = r#"[{"powerRating":2000,"name":"Kettle","icon":"mug-hot","isOn":false}]"#;
        let catalog = Catalog::from_json(json).unwrap();
        let kettle = catalog.find("Kettle").unwrap();
        assert_eq!(kettle.icon(), &Icon::new("mug-hot").unwrap());
        assert_eq!(kettle.icon().styled(true), ("mug-hot", IconStyle::Solid));
    }

    #[test]
    fn exported_catalog_loads_back() {
        let mut catalog = devices();
        catalog.find_mut("Laptop").unwrap().set_on(true);
        let loaded = Catalog::from_json(&catalog.to_json().unwrap()).unwrap();
        assert_eq!(loaded, catalog);
    }

    #[test]
    fn negative_rating_cannot_be_loaded() {
        let json = r#"[{"powerRating":-500,"name":"Generator","icon":"bolt","isOn":false}]"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }
}
