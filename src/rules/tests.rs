use std::collections::HashMap;
use std::sync::Arc;

use crate::api::{AirportInfo, AirportLookup};
use crate::engine::dispatch;
use crate::{RuleLibrary, decode_token};

#[test]
fn token_examples_decode() {
    // Array of (input_token, expected_explanation), one block per family.
    let cases: Vec<(&str, &str)> = vec![
        // Report metadata
        ("121651Z", "Time: Day 12, 16:51 UTC (Zulu time)"),
        ("010005Z", "Time: Day 01, 00:05 UTC (Zulu time)"),
        ("RMK", "Remarks section begins"),
        ("$", "Automated station requires maintenance"),
        ("AUTO", "Fully automated report"),
        ("NOSIG", "No significant change"),
        ("COR", "Correction to a previously disseminated observation"),
        ("LAST", "Last observation before a break in coverage"),
        ("RWY04R", "Runway 04 Right"),
        ("RWY22", "Runway 22"),
        // Temperature
        ("22/12", "Temperature: 22°C, Dewpoint: 12°C"),
        ("M05/M12", "Temperature: -5°C, Dewpoint: -12°C"),
        ("05/M01", "Temperature: 5°C, Dewpoint: -1°C"),
        ("T00050012", "Precise temperature: 0.5°C, Dewpoint: 1.2°C"),
        ("T10081016", "Precise temperature: -0.8°C, Dewpoint: -1.6°C"),
        ("10142", "6-hour maximum temperature: 14.2°C"),
        ("11021", "6-hour maximum temperature: -2.1°C"),
        ("20012", "6-hour minimum temperature: 1.2°C"),
        ("401120084", "24-hour temperature: Maximum 11.2°C, Minimum 8.4°C"),
        // Precipitation status
        ("PWINO", "Precipitation identifier sensor not available"),
        ("PNO", "Precipitation amount not available"),
        ("AO2", "Automated station with precipitation discriminator"),
        ("AO1", "Automated station without precipitation discriminator"),
        // Weather phenomena
        ("RA", "Moderate rain"),
        ("-RA", "Light rain"),
        ("+SHRA", "Heavy rain showers"),
        ("VCSHRA", "Moderate rain showers in the vicinity"),
        ("-DZ", "Light drizzle"),
        ("VCDZ", "Moderate drizzle in the vicinity"),
        ("GS", "Moderate snow pellets"),
        ("+GS", "Heavy snow pellets"),
        ("SN", "Moderate snow"),
        ("-SN", "Light snow"),
        ("BLSN", "Blowing snow"),
        ("+BLSN", "Blowing snow"),
        ("VCBLSN", "Blowing snow in the vicinity"),
        ("IC", "Moderate ice crystals"),
        ("GR", "Moderate hail"),
        ("-GR", "Light hail"),
        ("SG", "Moderate snow grains"),
        ("PL", "Moderate ice pellets"),
        ("VCPL", "Moderate ice pellets in the vicinity"),
        ("SQ", "Moderate squalls"),
        ("+SQ", "Heavy squalls"),
        ("DS", "Moderate duststorm"),
        ("SS", "Moderate sandstorm"),
        ("PO", "Moderate dust/sand whirls"),
        ("FC", "Moderate funnel clouds"),
        ("+FC", "Tornado"),
        ("VC+FC", "Tornado in the vicinity"),
        ("VIRGA", "Precipitation evaporating before reaching the ground"),
        ("DU", "Widespread dust"),
        ("UP", "Unknown precipitation"),
        ("SH", "Moderate shower"),
        // Precipitation amounts and timing
        ("P0009", "Hourly Precipitation Rate: 0.09 inches"),
        ("60217", "3-hour precipitation amount: 2.170 inches"),
        ("6////", "3-hour precipitation amount: Missing or unavailable data"),
        ("RAB05E30", "Rain began 5 minutes after the hour and ended 30 minutes after the hour"),
        ("RAB01", "Rain began 1 minute after the hour"),
        ("RAE45", "Rain ending 45 minutes after the hour"),
        ("DZB21", "Drizzle began 21 minutes after the hour"),
        ("DZE01", "Drizzle ending 1 minute after the hour"),
        // Thunderstorm
        ("VCTS", "Thunderstorm in the vicinity"),
        ("TS", "Thunderstorm"),
        ("+TS", "Heavy thunderstorm"),
        ("TSRA", "Thunderstorm with moderate rain"),
        ("+TSRA", "Heavy thunderstorm with moderate rain"),
        ("TS+RA", "Thunderstorm with heavy rain"),
        ("-TSRAGR", "Light thunderstorm with moderate rain and hail"),
        ("TSGR", "Thunderstorm with hail"),
        ("VCTSRA", "Thunderstorm with moderate rain in the vicinity"),
        ("TSB25", "Thunderstorm began 25 minutes after the hour"),
        ("TSE08", "Thunderstorm ending 8 minutes after the hour"),
        ("TSNO", "Thunderstorm information not available"),
        // Lightning
        ("FRQ", "Frequent"),
        ("MDT", "Moderate"),
        ("LTG", "Lightning detected"),
        ("LTGCG", "Cloud-to-Ground lightning"),
        ("LTGCGIC", "Cloud-to-Ground and Intra-Cloud lightning"),
        ("LTGCGCCIC", "Lightning detected (Cloud-to-Ground, Cloud-to-Cloud, Intra-Cloud)"),
        // Obscurations
        ("FU", "Smoke"),
        ("HZ", "Haze"),
        ("BR", "Mist"),
        ("FG", "Fog"),
        ("BCFG", "Patchy fog"),
        ("VA", "Volcanic ash"),
        ("VISNO", "Visibility at secondary location not available"),
        ("ALQDS", "In all quadrants"),
        ("OBSCNE", "Obscuration to the Northeast"),
        ("OBSCG", "Obscuration due to Ground/Terrain"),
        ("OBSCAL", "Obscuration All Around"),
        // Sky condition
        ("CLR", "Clear skies, no clouds"),
        ("FEW250", "Few clouds at 25,000 feet"),
        ("SCT080", "Scattered clouds at 8,000 feet"),
        ("BKN025", "Broken clouds at 2,500 feet"),
        ("OVC008", "Overcast at 800 feet"),
        ("CB", "Cumulonimbus clouds"),
        ("CU", "Cumulus clouds"),
        ("CIG 030 N", "Ceiling at 3,000 feet to the North"),
        ("CIG 005", "Ceiling at 500 feet"),
        ("CIG", "Ceiling"),
        ("TCU", "Towering cumulus clouds"),
        ("ACSL", "Altocumulus standing lenticular clouds"),
        ("ACC", "Altocumulus castellanus clouds"),
        ("CCSL", "Cirrocumulus standing lenticular clouds"),
        ("CBMAM", "Cumulonimbus mammatus clouds"),
        ("SCSL", "Stratocumulus standing lenticular clouds"),
        ("BINOVC", "Breaks in overcast"),
        ("BOVC", "Base of overcast"),
        ("CHINO", "Sky conditions at secondary location not available"),
        ("BKN", "Broken clouds"),
        ("SCT", "Scattered clouds"),
        // Direction
        ("NE", "Northeast"),
        ("W", "West"),
        ("E-S", "From East to South"),
        // Wind
        ("24016KT", "Wind: 240° at 16 knots"),
        ("24016G25KT", "Wind: 240° at 16 knots, gusting to 25 knots"),
        ("VRB04KT", "Wind: variable at 04 knots"),
        ("VRB06G18KT", "Wind: variable at 06 knots, gusting to 18 knots"),
        ("180V250", "Winds varying from 180° to 250°"),
        ("PK WND 28015/25", "Peak wind from 280° at 15 knots, occurring at 25 minutes past the hour"),
        ("PK WND 32024/1456", "Peak wind from 320° at 24 knots, occurring at 14:56 UTC"),
        ("PK WND", "Peak wind"),
        ("WND", "Wind"),
        ("WSHFT 2032", "Wind shift at 20:32 UTC"),
        ("PK", "Peak"),
        // Movement, proximity, frequency
        ("MOV LTL", "Moving little"),
        ("MOV", "Moving"),
        ("MOVG", "Moving"),
        ("STNRY", "Stationary"),
        ("ALF", "Aloft"),
        ("VC", "In the vicinity"),
        ("DSNT", "Distant"),
        ("DSIPTD", "Dissipated"),
        ("V", "Variable"),
        ("OHD", "Overhead"),
        ("OCNL", "Occasional"),
        ("CONS", "Continuous"),
        // Pressure
        ("A3012", "Altimeter: 30.12 inHg"),
        ("A2992", "Altimeter: 29.92 inHg"),
        ("52032", "Pressure increasing, Δ3.2 hPa in past 3 hours"),
        ("57015", "Pressure decreasing, Δ1.5 hPa in past 3 hours"),
        ("SLP132", "Sea-level pressure: 1013.2 hPa"),
        ("SLP987", "Sea-level pressure: 998.7 hPa"),
        ("SLPNO", "Sea-level pressure not available"),
        ("PRESRR", "Pressure rising rapidly"),
        // Miscellany
        ("METAR", "METAR"),
        ("BNK", "Bank"),
        ("LGT", "Light"),
        ("MTNS", "Mountains"),
        ("10SM", "Visibility: 10 statute miles"),
        ("2SM", "Visibility: 2 statute miles"),
        ("VIS", "Visibility"),
        ("R06L/2000VP6000FT", "Runway 06 Left: 2000-6000ft visibility"),
        ("AND", "And"),
        ("THRU", "Through"),
        ("SPECI", "Special report"),
    ];

    let library = RuleLibrary::new();

    for (input, expected) in cases {
        let decoded = decode_token(input, &library);
        match decoded {
            Some(decoded) => assert_eq!(
                decoded.explanation, expected,
                "wrong explanation for token '{input}' (category '{}')",
                decoded.category
            ),
            None => panic!("no rule decoded token '{input}' (expected '{expected}')"),
        }
    }
}

fn coverage_lookup() -> Arc<dyn AirportLookup> {
    let mut airports = HashMap::new();
    airports.insert(
        String::from("KBOS"),
        AirportInfo {
            iata: String::from("BOS"),
            icao: String::from("KBOS"),
            name: String::from("General Edward Lawrence Logan International Airport"),
            country: String::from("United States"),
            city: String::from("Boston"),
            notes: String::new(),
        },
    );
    Arc::new(airports)
}

#[test]
fn every_rule_is_first_match_for_its_example() {
    let rules = super::get(Some(coverage_lookup()));

    for (index, rule) in rules.iter().enumerate() {
        let hit = dispatch::first_match(rule.example, &rules);
        let (first, decoded) = match hit {
            Some(hit) => hit,
            None => panic!("no rule matched example '{}' of rule {index} ('{}')", rule.example, rule.category),
        };

        assert_eq!(
            first, index,
            "example '{}' of rule {index} ('{}') is shadowed by rule {first} ('{}')",
            rule.example, rule.category, rules[first].category
        );
        assert!(!decoded.explanation.is_empty(), "empty explanation for example '{}'", rule.example);
        assert_eq!(
            decoded.explanation.trim(),
            decoded.explanation,
            "explanation for '{}' carries stray whitespace",
            rule.example
        );
    }
}

#[test]
fn ceiling_priority_order() {
    // The three ceiling rules nest; the direction-bearing form must win.
    let library = RuleLibrary::new();

    let decoded = decode_token("CIG 030 N", &library).unwrap();
    assert_eq!(decoded.category, "ceiling-alt-dir");
    assert!(decoded.explanation.contains("3,000 feet"));
    assert!(decoded.explanation.contains("North"));

    assert_eq!(decode_token("CIG 030", &library).unwrap().category, "ceiling-alt");
    assert_eq!(decode_token("CIG", &library).unwrap().category, "ceiling");
}

#[test]
fn station_rule_modes() {
    let strict = RuleLibrary::with_lookup(coverage_lookup());
    let decoded = decode_token("KBOS", &strict).unwrap();
    assert_eq!(
        decoded.explanation,
        "Airport: General Edward Lawrence Logan International Airport (KBOS) - Boston, United States"
    );
    assert!(decode_token("KLAX", &strict).is_none());

    let fallback = RuleLibrary::new();
    assert_eq!(decode_token("KLAX", &fallback).unwrap().explanation, "Airport: KLAX (ICAO identifier)");
}

#[test]
fn fixed_codes_survive_the_generic_station_fallback() {
    // Without a lookup every unknown four-letter token reads as an
    // identifier, but the fixed report codes must keep their meanings.
    let library = RuleLibrary::new();

    assert_eq!(decode_token("AUTO", &library).unwrap().category, "auto");
    assert_eq!(decode_token("LAST", &library).unwrap().category, "last");
    assert_eq!(decode_token("TSNO", &library).unwrap().category, "thunderstorm-no");
    assert_eq!(decode_token("MTNS", &library).unwrap().category, "mountains");
}
