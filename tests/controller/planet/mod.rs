mod get_planets;

use super::*;
