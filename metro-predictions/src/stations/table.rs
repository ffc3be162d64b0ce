//! Static WMATA platform table.
//!
//! Names are the shortened display forms used on platform signs. The two
//! platforms of a two-platform station share a name and a location.

use crate::domain::Station;

/// Every platform, ordered by code.
pub static STATIONS: [Station; 95] = [
    Station::new("A01", "Metro Center", 38.898303, -77.028099),
    Station::new("A02", "Farragut North", 38.903192, -77.039766),
    Station::new("A03", "Dupont Circle", 38.909499, -77.04362),
    Station::new("A04", "Woodley Park-Zoo/Adams Morgan", 38.924999, -77.052648),
    Station::new("A05", "Cleveland Park", 38.934703, -77.058226),
    Station::new("A06", "Van Ness-UDC", 38.94362, -77.0635110),
    Station::new("A07", "Tenleytown-AU", 38.947808, -77.079615),
    Station::new("A08", "Friendship Heights", 38.960744, -77.085969),
    Station::new("A09", "Bethesda", 38.984282, -77.094431),
    Station::new("A10", "Medical Center", 38.999947, -77.0972529),
    Station::new("A11", "Grosvenor-Strathmore", 39.029158, -77.10415),
    Station::new("A12", "White Flint", 39.048043, -77.113131),
    Station::new("A13", "Twinbrook", 39.062359, -77.1211129),
    Station::new("A14", "Rockville", 39.084215, -77.146424),
    Station::new("A15", "Shady Grove", 39.119819, -77.164921),
    Station::new("B01", "Gallery Pl-Chinatown", 38.89834, -77.021851),
    Station::new("B02", "Judiciary Square", 38.896084, -77.016643),
    Station::new("B03", "Union Station", 38.897723, -77.006745),
    Station::new("B04", "Rhode Island Ave-Brentwood", 38.920741, -76.995984),
    Station::new("B05", "Brookland-CUA", 38.933234, -76.994544),
    Station::new("B06", "Fort Totten", 38.951777, -77.002174),
    Station::new("B07", "Takoma", 38.975532, -77.017834),
    Station::new("B08", "Silver Spring", 38.993841, -77.031321),
    Station::new("B09", "Forest Glen", 39.015413, -77.042953),
    Station::new("B10", "Wheaton", 39.038558, -77.051098),
    Station::new("B11", "Glenmont", 39.061713, -77.05341),
    Station::new("B35", "NoMa-Gallaudet U", 38.907407, -77.002961),
    Station::new("C01", "Metro Center", 38.898303, -77.028099),
    Station::new("C02", "McPherson Square", 38.901316, -77.033652),
    Station::new("C03", "Farragut West", 38.901311, -77.03981),
    Station::new("C04", "Foggy Bottom-GWU", 38.900599, -77.050273),
    Station::new("C05", "Rosslyn", 38.896595, -77.07146),
    Station::new("C06", "Arlington Cemetary", 38.884574, -77.063108),
    Station::new("C07", "Pentagon", 38.869349, -77.054013),
    Station::new("C08", "Pentagon City", 38.863045, -77.059507),
    Station::new("C09", "Crystal City", 38.85779, -77.050589),
    Station::new("C10", "Reagan National Airport", 38.852985, -77.043805),
    Station::new("C12", "Braddock Road", 38.814009, -77.053763),
    Station::new("C13", "King St-Old Town", 38.806474, -77.061115),
    Station::new("C14", "Eisenhower Avenue", 38.800313, -77.071173),
    Station::new("C15", "Huntington", 38.793841, -77.075301),
    Station::new("D01", "Federal Triangle", 38.893757, -77.028218),
    Station::new("D02", "Smithsonian", 38.888022, -77.028232),
    Station::new("D03", "L'Enfant Plaza", 38.884775, -77.021964),
    Station::new("D04", "Federal Center SW", 38.884958, -77.01586),
    Station::new("D05", "Capitol South", 38.884968, -77.005137),
    Station::new("D06", "Eastern Market", 38.884124, -76.995334),
    Station::new("D07", "Potomac Ave", 38.880841, -76.985721),
    Station::new("D08", "Stadium-Armory", 38.88594, -76.977485),
    Station::new("D09", "Minnesota Ave", 38.898284, -76.948042),
    Station::new("D10", "Deanwood", 38.907734, -76.936177),
    Station::new("D11", "Cheverly", 38.91652, -76.915427),
    Station::new("D12", "Landover", 38.934411, -76.890988),
    Station::new("D13", "New Carrollton", 38.947674, -76.872144),
    Station::new("E01", "Mt Vernon Sq", 38.905604, -77.022256),
    Station::new("E02", "Shaw-Howard U", 38.912919, -77.022194),
    Station::new("E03", "U Street", 38.916489, -77.028938),
    Station::new("E04", "Columbia Heights", 38.928672, -77.032775),
    Station::new("E05", "Georgia Ave-Petworth", 38.936077, -77.024728),
    Station::new("E06", "Fort Totten", 38.951777, -77.002174),
    Station::new("E07", "West Hyattsville", 38.954931, -76.969881),
    Station::new("E08", "Prince George's Plaza", 38.965276, -76.956182),
    Station::new("E09", "College Park-U of MD", 38.978523, -76.928432),
    Station::new("E10", "Greenbelt", 39.011036, -76.911362),
    Station::new("F01", "Gallery Pl-Chinatown", 38.89834, -77.021851),
    Station::new("F02", "Archives", 38.893893, -77.021902),
    Station::new("F03", "L'Enfant Plaza", 38.884775, -77.021964),
    Station::new("F04", "Waterfront", 38.876221, -77.017491),
    Station::new("F05", "Navy Yard-Ballpark", 38.876588, -77.005086),
    Station::new("F06", "Anacostia", 38.862072, -76.995648),
    Station::new("F07", "Congress Heights", 38.845334, -76.98817),
    Station::new("F08", "Southern Avenue", 38.840974, -76.975360),
    Station::new("F09", "Naylor Road", 38.851187, -76.956565),
    Station::new("F10", "Suitland", 38.843891, -76.932022),
    Station::new("F11", "Branch Ave", 38.826995, -76.912134),
    Station::new("G01", "Benning Road", 38.890488, -76.938291),
    Station::new("G02", "Capitol Heights", 38.889757, -76.913382),
    Station::new("G03", "Addison Road-Seat Pleasant", 38.886713, -76.893592),
    Station::new("G04", "Morgan Boulevard", 38.8913, -76.8682),
    Station::new("G05", "Largo Town Center", 38.9008, -76.8449),
    Station::new("J02", "Van Dorn Street", 38.799193, -77.129407),
    Station::new("J03", "Franconia-Springfield", 38.766129, -77.168797),
    Station::new("K01", "Court House", 38.891499, -77.08391),
    Station::new("K02", "Clarendon", 38.886373, -77.096963),
    Station::new("K03", "Virginia Square-GMU", 38.88331, -77.104267),
    Station::new("K04", "Ballston-MU", 38.882071, -77.111845),
    Station::new("K05", "East Falls Church", 38.885841, -77.157177),
    Station::new("K06", "West Falls Church-UT/UVA", 38.90067, -77.189394),
    Station::new("K07", "Dunn Loring-Merrifield", 38.883015, -77.228939),
    Station::new("K08", "Vienna/Fairfax/GMU", 38.877693, -77.271562),
    Station::new("N01", "McLean", 38.924478, -77.210167),
    Station::new("N02", "Tyson's Corner", 38.920056, -77.223314),
    Station::new("N03", "Greensboro", 38.919749, -77.235192),
    Station::new("N04", "Spring Hill", 38.92902, -77.241780),
    Station::new("N06", "Wiehle-Reston East", 38.947753, -77.340179),
];

/// Destination label for trains with no announced destination.
pub static TRAIN: Station = Station::sentinel("Train", "Train");

/// Destination label for out-of-service trains.
pub static NO_PASSENGER: Station = Station::sentinel("No", "No Passenger");

/// Code pairs naming the two platforms of the same physical station.
pub(super) const PLATFORM_PAIRS: [(&str, &str); 4] = [
    ("A01", "C01"), // Metro Center
    ("B01", "F01"), // Gallery Pl-Chinatown
    ("B06", "E06"), // Fort Totten
    ("D03", "F03"), // L'Enfant Plaza
];
