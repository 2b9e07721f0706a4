// Fixed RSA keys for tests
// Generated once offline so tests do not spend time on prime search

use super::bigint::RsaBigInt;
use super::keygen::{PrivateKey, PublicKey};

const PUBLIC_EXPONENT: u64 = 65537;

const MODULUS_2048: &str = "\
    29010398763885550982292743126802361701747540056959754252067833461725429952021286\
    12916545287736540849760933512070850510588620113243156081137102085216229034304074\
    54417590380842407546827388468567971842451561501545945174569753076004728030963863\
    54385694180863457491484751967011229380637061045368232039953676569705426006078243\
    57805561198590808223385563933503350557963962344267553133350814576739342016206164\
    18877430672390792698790526715552423820410024551319534088820255559550423541150236\
    19847039129216455561058848521350484773183056020608885124358570642217233042185040\
    319162437318932274143531372851695046216969633017684272171";

const PRIVATE_EXPONENT_2048: &str = "\
    25695341981568098378322613989420075561332395520490712343012856810446583729113807\
    73037820175817183014891170918850248415988650996132546869674329033105446739754381\
    78647669048432794807181229623318638776731132673783344149006286930374024638622310\
    31316367484180874627549428295177805561548745282230421494045058783866225026712904\
    81533631326538659904229009389173328061746073903215428842897669592535378033423235\
    23053556888095241968602754230309369982179559596152297032106008121423146195680412\
    66736289530535091170401074828276550488915020998462289343061325249337614692830730\
    462363635112624422146127988716847456223514130233884713473";

const MODULUS_1024: &str = "\
    13579708338240460775702619825456075264358396205413545752991671899163924169882410\
    34973711787440397011464009312704710864978534585653919263012701679156318649773671\
    05797682067219412292559850732045709382994091531148937718071055551060798918579721\
    422254773012437277067529285875164364805163916190991243442147375046073";

const PRIVATE_EXPONENT_1024: &str = "\
    94140239701432603631917409483184440466544854784404782671722939621086495691024543\
    29914498319846736564359725819630609995661956120972048442323584446817679357397180\
    53191708798565251431738471254908122423911602705752149104530939540588292801803600\
    45989233858902082242846129080336009039363247712955833446667820237265";

fn parse(digits: &str) -> RsaBigInt {
    digits.parse().expect("fixture is a decimal integer")
}

fn pair(modulus: &str, private_exponent: &str) -> (PublicKey, PrivateKey) {
    let n = parse(modulus);
    let public_key = PublicKey::new(RsaBigInt::from(PUBLIC_EXPONENT), n.clone()).unwrap();
    let private_key = PrivateKey::new(parse(private_exponent), n).unwrap();
    (public_key, private_key)
}

/// 2048-bit key, e = 65537
pub fn rsa2048() -> (PublicKey, PrivateKey) {
    pair(MODULUS_2048, PRIVATE_EXPONENT_2048)
}

/// 1024-bit key, e = 65537; cheap enough for property tests
pub fn rsa1024() -> (PublicKey, PrivateKey) {
    pair(MODULUS_1024, PRIVATE_EXPONENT_1024)
}
