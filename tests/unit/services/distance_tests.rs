// Distance labels

use nearby_places::models::place::Coordinate;
use nearby_places::utils::geo::distance_label;
use test_case::test_case;

const TIMES_SQUARE: Coordinate = Coordinate::new(40.7580, -73.9855);

#[test_case(Some(TIMES_SQUARE), TIMES_SQUARE => "0m" ; "same spot")]
#[test_case(Some(TIMES_SQUARE), Coordinate::new(40.7614, -73.9776) => "765m" ; "a few blocks")]
#[test_case(None, TIMES_SQUARE => "Unknown" ; "no fix")]
fn test_distance_label(user: Option<Coordinate>, place: Coordinate) -> String {
    distance_label(user, place)
}
