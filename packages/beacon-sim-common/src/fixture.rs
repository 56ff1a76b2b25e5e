//! The pre-recorded drand beacon rounds served by the simulation.
//!
//! The reference dataset holds 21 consecutive rounds of the drand mainnet
//! chain (`pedersen-bls-chained`), starting at round 2183660. Each entry is
//! exactly what `https://api3.drand.sh/public/<round>` returned for that round.
//! Beyond the last round the simulation has no randomness, which lets tests hit
//! the "not yet available" path deterministically.

use cosmwasm_std::Timestamp;
use sha2::{Digest, Sha256};
use thiserror::Error;

/// First round of the reference dataset.
pub const GENESIS_ROUND: u64 = 2183660;

/// Publish time of [`GENESIS_ROUND`] in nanoseconds since the unix epoch.
pub const GENESIS_PUBLISH_TIME: Timestamp = Timestamp::from_nanos(1660940820000000000);

/// Spacing between two consecutive drand mainnet rounds.
pub const PERIOD_SECONDS: u64 = 30;

/// Number of rounds in the reference dataset.
pub const REFERENCE_ROUNDS: usize = 21;

/// One output of the beacon network at a fixed round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Beacon {
    pub round: u64,
    /// sha256(signature), 32 bytes hex encoded
    pub randomness: &'static str,
    /// BLS signature on G2, 96 bytes hex encoded
    pub signature: &'static str,
    /// Signature of the previous round, which this round's signature chains to
    pub previous_signature: &'static str,
}

impl Beacon {
    pub fn randomness_bytes(&self) -> Result<[u8; 32], FixtureError> {
        let bytes = decode_field(self.round, "randomness", self.randomness)?;
        bytes
            .try_into()
            .map_err(|_| FixtureError::InvalidRandomnessLength { round: self.round })
    }

    pub fn signature_bytes(&self) -> Result<Vec<u8>, FixtureError> {
        decode_field(self.round, "signature", self.signature)
    }

    pub fn previous_signature_bytes(&self) -> Result<Vec<u8>, FixtureError> {
        decode_field(self.round, "previous_signature", self.previous_signature)
    }
}

fn decode_field(round: u64, field: &str, value: &str) -> Result<Vec<u8>, FixtureError> {
    hex::decode(value).map_err(|_| FixtureError::InvalidHex {
        round,
        field: field.to_string(),
    })
}

/// Derive drand randomness from a beacon signature: `sha256(signature)`.
pub fn derive_randomness(signature: &[u8]) -> [u8; 32] {
    Sha256::digest(signature).into()
}

#[derive(Error, Debug, PartialEq)]
pub enum FixtureError {
    #[error("fixture must contain at least one beacon")]
    Empty,

    #[error("round period must be greater than zero")]
    ZeroPeriod,

    #[error("round {got} breaks the contiguous run, expected round {expected}")]
    NonContiguous { expected: u64, got: u64 },

    #[error("previous_signature of round {round} does not match the signature of its predecessor")]
    BrokenChain { round: u64 },

    #[error("invalid hex input in round {round}: {field}")]
    InvalidHex { round: u64, field: String },

    #[error("randomness of round {round} must be 32 bytes")]
    InvalidRandomnessLength { round: u64 },
}

/// Read-only catalog of consecutive beacon rounds.
///
/// Lookup is index arithmetic over an immutable slice: round `r` lives at
/// `r - first_round`.
#[derive(Debug, Clone, Copy)]
pub struct BeaconFixture {
    beacons: &'static [Beacon],
    genesis_round: u64,
    genesis_publish_time: Timestamp,
    period_seconds: u64,
}

impl Default for BeaconFixture {
    fn default() -> Self {
        Self::reference()
    }
}

impl BeaconFixture {
    /// The frozen 21-round drand mainnet dataset.
    pub fn reference() -> Self {
        Self {
            beacons: &REFERENCE_BEACONS,
            genesis_round: GENESIS_ROUND,
            genesis_publish_time: GENESIS_PUBLISH_TIME,
            period_seconds: PERIOD_SECONDS,
        }
    }

    /// Build a fixture over a custom dataset.
    ///
    /// The rounds must be a non-empty ascending run without gaps, every
    /// `previous_signature` must equal the predecessor's `signature` and all
    /// fields must be valid hex.
    pub fn new(
        beacons: &'static [Beacon],
        genesis_publish_time: Timestamp,
        period_seconds: u64,
    ) -> Result<Self, FixtureError> {
        let first = beacons.first().ok_or(FixtureError::Empty)?;
        if period_seconds == 0 {
            return Err(FixtureError::ZeroPeriod);
        }

        for beacon in beacons {
            beacon.randomness_bytes()?;
            beacon.signature_bytes()?;
            beacon.previous_signature_bytes()?;
        }

        for (pair, expected) in beacons.windows(2).zip(first.round + 1..) {
            let (prev, curr) = (&pair[0], &pair[1]);
            if curr.round != expected {
                return Err(FixtureError::NonContiguous {
                    expected,
                    got: curr.round,
                });
            }
            if curr.previous_signature != prev.signature {
                return Err(FixtureError::BrokenChain { round: curr.round });
            }
        }

        Ok(Self {
            beacons,
            genesis_round: first.round,
            genesis_publish_time,
            period_seconds,
        })
    }

    /// Returns the beacon for `round`, or `None` when the simulation has no
    /// data for it.
    pub fn lookup(&self, round: u64) -> Option<&'static Beacon> {
        let index = round.checked_sub(self.genesis_round)?;
        let beacons: &'static [Beacon] = self.beacons;
        beacons.get(usize::try_from(index).ok()?)
    }

    pub fn contains(&self, round: u64) -> bool {
        self.lookup(round).is_some()
    }

    pub fn first_round(&self) -> u64 {
        self.genesis_round
    }

    pub fn last_round(&self) -> u64 {
        self.genesis_round + self.beacons.len() as u64 - 1
    }

    pub fn len(&self) -> usize {
        self.beacons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.beacons.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static Beacon> {
        let beacons: &'static [Beacon] = self.beacons;
        beacons.iter()
    }

    pub fn genesis_publish_time(&self) -> Timestamp {
        self.genesis_publish_time
    }

    pub fn period_seconds(&self) -> u64 {
        self.period_seconds
    }

    /// `genesis_publish_time + (round - first_round) * period`.
    ///
    /// Defined for every round, not only the ones with data. Saturates at the
    /// ends of the `u64` nanosecond range.
    pub fn publish_time(&self, round: u64) -> Timestamp {
        let period_nanos = self.period_seconds.saturating_mul(1_000_000_000);
        let offset = round.abs_diff(self.genesis_round).saturating_mul(period_nanos);
        let genesis = self.genesis_publish_time.nanos();
        if round >= self.genesis_round {
            Timestamp::from_nanos(genesis.saturating_add(offset))
        } else {
            Timestamp::from_nanos(genesis.saturating_sub(offset))
        }
    }

    /// First round with data published strictly after `time`.
    pub fn round_after(&self, time: Timestamp) -> Option<&'static Beacon> {
        self.iter().find(|b| self.publish_time(b.round) > time)
    }
}

// Generated with:
//   for r in {2183660..2183680}; do curl -sS https://api3.drand.sh/public/$r; done
static REFERENCE_BEACONS: [Beacon; REFERENCE_ROUNDS] = [
    Beacon {
        round: 2183660,
        randomness: "cbc851305a9b82e38863a77e5bc61b8707554adb3920418a6903489b284f88c2",
        signature: "b7cc14cb609b83ab5a9b95a095d3482a3b101450c7dbf9eff544c69db9d12ccd50751b2a0ff936885d254f3ddb0b143312aef9a9487dd2b7d766e35b5ccf0e34677070d3c612142b2c0d1d47633fd365a1a4b9bf58d8c745fb65d33c0d7323c0",
        previous_signature: "82af59ce7dfdfab98af6553c0f6a5bad22d2e246eb128740e45378dba3caf17572cf52b3d2c4d2fd68ba85357b1ab8b2052db62300a6007c6d82de0a1231a6ad75acc41f4174a1428873ed83db3bebe8e58e7bc0b13ec1cc4498a5a2a391baf0",
    },
    Beacon {
        round: 2183661,
        randomness: "298403ad854a067cc64c9518a1bf1406425ad109269a49778b42d65c88919b1f",
        signature: "b6129952af337fed2e0a46fec8eb99167bd7a4d0ef1872ac4903f736f4628ae61b7d3d605a88ace5b03b4c52746c55f6056c8cd34058ef15282fd2ac054e1236b57921e8a0d4e824934cae04807b255d885c416be45f33014835023cb36f94f5",
        previous_signature: "b7cc14cb609b83ab5a9b95a095d3482a3b101450c7dbf9eff544c69db9d12ccd50751b2a0ff936885d254f3ddb0b143312aef9a9487dd2b7d766e35b5ccf0e34677070d3c612142b2c0d1d47633fd365a1a4b9bf58d8c745fb65d33c0d7323c0",
    },
    Beacon {
        round: 2183662,
        randomness: "5059bd56c8f1a6bb541636c27346b660fea3a2b8fa2565da6f44601da93606da",
        signature: "a9ddbfc829c7fcbc2149419463017d13978851b4e5fa06b27b07a4bf94217d20f0645715abb847c4e2db30ef270325160c848419d3b227ccb4248c6c6c05d3551742d396b69e46b91e11e77c1b7c5eb6482db5c205f0fff844a03c60c8841c8b",
        previous_signature: "b6129952af337fed2e0a46fec8eb99167bd7a4d0ef1872ac4903f736f4628ae61b7d3d605a88ace5b03b4c52746c55f6056c8cd34058ef15282fd2ac054e1236b57921e8a0d4e824934cae04807b255d885c416be45f33014835023cb36f94f5",
    },
    Beacon {
        round: 2183663,
        randomness: "519e33609b0f4eb617b58ae7cac13b80f47a3035804e553d1765400d04fc85cb",
        signature: "a6ceb9cbe5135e749641ce48377ee2a8c93bb1aa754de156a134d3fd83b0937d8426f05ae74627a37a7d7aea39b5f3ac094207e62adcd46546d539ca5a3b16cb8c973992b5d948dfc3110da6cad61103300f8bd463187d146c5c2671b79fec16",
        previous_signature: "a9ddbfc829c7fcbc2149419463017d13978851b4e5fa06b27b07a4bf94217d20f0645715abb847c4e2db30ef270325160c848419d3b227ccb4248c6c6c05d3551742d396b69e46b91e11e77c1b7c5eb6482db5c205f0fff844a03c60c8841c8b",
    },
    Beacon {
        round: 2183664,
        randomness: "5b55519446ece9bb310bc5634ab0ffc8f76b1497566c97515f06920e19909746",
        signature: "b36d0d8ffba466f5671d202c8292986a680df788231d9debcebe1648f73c09ec3734508a0e9988a96c407aa91ca4c0e0025d15e53a271a334a026cc3556850dffeab8f6350bcdf722845bc2373c742d3fe8b3da9c423c3d55aa7c7c52d3077ac",
        previous_signature: "a6ceb9cbe5135e749641ce48377ee2a8c93bb1aa754de156a134d3fd83b0937d8426f05ae74627a37a7d7aea39b5f3ac094207e62adcd46546d539ca5a3b16cb8c973992b5d948dfc3110da6cad61103300f8bd463187d146c5c2671b79fec16",
    },
    Beacon {
        round: 2183665,
        randomness: "c2a8f26d59ec6693e41216c25d9d4f1f8479171d3d702e74b59aca3482e0d662",
        signature: "ad245ed733a081751bf92191c44fa4d2752d225d49c8ca1ceeccb09fc78a4c1cf6dd1d71d2cd606453207e54c90dcefb02a4de1f613c0091c69cc27815d6d1fba414b737ea5433e946f258f4f78accbed0ed979919c74077395c1383ac362cf9",
        previous_signature: "b36d0d8ffba466f5671d202c8292986a680df788231d9debcebe1648f73c09ec3734508a0e9988a96c407aa91ca4c0e0025d15e53a271a334a026cc3556850dffeab8f6350bcdf722845bc2373c742d3fe8b3da9c423c3d55aa7c7c52d3077ac",
    },
    Beacon {
        round: 2183666,
        randomness: "768bd188a948f1f2959d15c657f159dd34bdf741b7d4b17a29b877eb36c04dcf",
        signature: "93e948877a14c62abb1b611580b86c3c08ed1a732390f976e028475077e22312ada06e7f60e42a69ff8e256727a39ae60476738c74dd0485782664d4a882a6e75fef73feb3647e2261ba7a0358dfa15ecd9d67060e00adf201fbbbc86c7dd90d",
        previous_signature: "ad245ed733a081751bf92191c44fa4d2752d225d49c8ca1ceeccb09fc78a4c1cf6dd1d71d2cd606453207e54c90dcefb02a4de1f613c0091c69cc27815d6d1fba414b737ea5433e946f258f4f78accbed0ed979919c74077395c1383ac362cf9",
    },
    Beacon {
        round: 2183667,
        randomness: "3fde1bdae10b7c8c826bccee66f534b82d374f88c1f8d1836063b00d2817e327",
        signature: "b0272269d87be8f146a0dc4f882b03add1e0f98ee7c55ee674107c231cfa7d2e40d9c88dd6e72f2f52d1abe14766b2c40dd392eec82d678a4c925c6937717246e8ae96d54d8ea70f85f8282cf14c56e5b547b7ee82df4ff61f3523a0eefcdf41",
        previous_signature: "93e948877a14c62abb1b611580b86c3c08ed1a732390f976e028475077e22312ada06e7f60e42a69ff8e256727a39ae60476738c74dd0485782664d4a882a6e75fef73feb3647e2261ba7a0358dfa15ecd9d67060e00adf201fbbbc86c7dd90d",
    },
    Beacon {
        round: 2183668,
        randomness: "3436462283a07e695c41854bb953e5964d8737e7e29745afe54a9f4897b6c319",
        signature: "b06969214b8a7c8d705c4c5e00262626d95e30f8583dc21670508d6d4751ae95ddf675e76feabe1ee5f4000dd21f09d009bb2b57da6eedd10418e83c303c2d5845914175ffe13601574d039a7593c3521eaa98e43be927b4a00d423388501f05",
        previous_signature: "b0272269d87be8f146a0dc4f882b03add1e0f98ee7c55ee674107c231cfa7d2e40d9c88dd6e72f2f52d1abe14766b2c40dd392eec82d678a4c925c6937717246e8ae96d54d8ea70f85f8282cf14c56e5b547b7ee82df4ff61f3523a0eefcdf41",
    },
    Beacon {
        round: 2183669,
        randomness: "408de94b8c7e1972b06a4ab7636eb1ba2a176022a30d018c3b55e89289d41149",
        signature: "990538b0f0ca3b934f53eb41d7a4ba24f3b3800abfc06275eb843df75a53257c2dbfb8f6618bb72874a79303429db13e038e6619c08726e8bbb3ae58ebb31e08d2aed921e4246fdef984285eb679c6b443f24bd04f78659bd4230e654db4200d",
        previous_signature: "b06969214b8a7c8d705c4c5e00262626d95e30f8583dc21670508d6d4751ae95ddf675e76feabe1ee5f4000dd21f09d009bb2b57da6eedd10418e83c303c2d5845914175ffe13601574d039a7593c3521eaa98e43be927b4a00d423388501f05",
    },
    Beacon {
        round: 2183670,
        randomness: "e5f7ba655389eee248575dde70cb9f3293c9774c8538136a135601907158d957",
        signature: "a63dcbd669534b049a86198ee98f1b68c24aac50de411d11f2a8a98414f9312cd04027810417d0fa60461c0533d604630ada568ef83af93ce05c1620c8bee1491092c11e5c7d9bb679b5b8de61bbb48e092164366ae6f799c082ddab691d1d78",
        previous_signature: "990538b0f0ca3b934f53eb41d7a4ba24f3b3800abfc06275eb843df75a53257c2dbfb8f6618bb72874a79303429db13e038e6619c08726e8bbb3ae58ebb31e08d2aed921e4246fdef984285eb679c6b443f24bd04f78659bd4230e654db4200d",
    },
    Beacon {
        round: 2183671,
        randomness: "324e2a196293b42806c12c7bbd1aeba8d5617942f152a16588223f905f60801a",
        signature: "b449f94098616029baea233fa8b64851cf9de2b230a7c5a2181c3abdc9e92806ae9020a5d9dcdbb707b6f1754480954b00a80b594cb35b51944167d2b20cc3b3cac6da7023c6a6bf867c6c3844768794edcaae292394316603797d669f62691a",
        previous_signature: "a63dcbd669534b049a86198ee98f1b68c24aac50de411d11f2a8a98414f9312cd04027810417d0fa60461c0533d604630ada568ef83af93ce05c1620c8bee1491092c11e5c7d9bb679b5b8de61bbb48e092164366ae6f799c082ddab691d1d78",
    },
    Beacon {
        round: 2183672,
        randomness: "e0f717062cb3b31c9f92e9417dd77549d1d2ec37e1eeac3135db94253a1d6ba7",
        signature: "aa207a74e1d45943ca48837abec678752a0cc1456e780a0a7379a3fa7215cd2ec4262d253c2f2c73dfc0ed8052b07afe08551e509d20274754af6401ce0368f28e4a196ce75f4696798483750ef9f8d3f348b8e9e2d6bcd300c2f5877e069b25",
        previous_signature: "b449f94098616029baea233fa8b64851cf9de2b230a7c5a2181c3abdc9e92806ae9020a5d9dcdbb707b6f1754480954b00a80b594cb35b51944167d2b20cc3b3cac6da7023c6a6bf867c6c3844768794edcaae292394316603797d669f62691a",
    },
    Beacon {
        round: 2183673,
        randomness: "acaaa0342f1511d73e1ed918b32d450d5f7501f5232522e4d97badabea224a6f",
        signature: "964ff46b75c4a105a90bb61596c95ad57ec77f94f045ef692006c01211cf94a13331adb0a823f09b1d772ab33e0af5bd005f345684a794187b6ad90d47aef78cff5a7a8db1c840e4a2d832f6796301da70b4788666d2034fe1c9e6134e607441",
        previous_signature: "aa207a74e1d45943ca48837abec678752a0cc1456e780a0a7379a3fa7215cd2ec4262d253c2f2c73dfc0ed8052b07afe08551e509d20274754af6401ce0368f28e4a196ce75f4696798483750ef9f8d3f348b8e9e2d6bcd300c2f5877e069b25",
    },
    Beacon {
        round: 2183674,
        randomness: "d58e0072e6a57fa978a7321f55a182334cbfcb510f0ac2e2e3bceb28f21bcd3e",
        signature: "819be8979aa6ddf9143891b52706483ccba468df5ca19c8facd4f09890d54bd77abc0d6ce7e2280d920292e1c645136a1914d6c0f6f352c76067798cb868b9b69c59da2315efe5ead65d6fbdeae3681d85e8f699c4e4eaad8bfc22da2252c3ae",
        previous_signature: "964ff46b75c4a105a90bb61596c95ad57ec77f94f045ef692006c01211cf94a13331adb0a823f09b1d772ab33e0af5bd005f345684a794187b6ad90d47aef78cff5a7a8db1c840e4a2d832f6796301da70b4788666d2034fe1c9e6134e607441",
    },
    Beacon {
        round: 2183675,
        randomness: "ee87e760c23fd8c4b6ac98623c8134f1c930f7f6163d2508a980ca4e639be4e4",
        signature: "931523c5fc820b8e31dcf7793a83b0a0c23cda7eaea45a7f6bf4728472df77961cb45076c54c725d491fe1a42f3b8f740a71eef62dbdbad886caff534b9734a864104b3a6c146bf7dfcf72f3b8fed5c6ec13cce60c02fdad97b07cfdc7a9f084",
        previous_signature: "819be8979aa6ddf9143891b52706483ccba468df5ca19c8facd4f09890d54bd77abc0d6ce7e2280d920292e1c645136a1914d6c0f6f352c76067798cb868b9b69c59da2315efe5ead65d6fbdeae3681d85e8f699c4e4eaad8bfc22da2252c3ae",
    },
    Beacon {
        round: 2183676,
        randomness: "545d24cb6af73e36921875eb0007365caccccbdf1be41904643e42896c2e1cc2",
        signature: "b2d7804b050cfaf332beb173d26c5ec01621caeea345927ac161d8f47f3f09ef14a5d2fd07fb9c5f6e5a0677bc44121505cc0230b0ec153bf195f343e52aafa317597f2ca617309eae61a67714b64afa36865542e069d407248e443e44996afc",
        previous_signature: "931523c5fc820b8e31dcf7793a83b0a0c23cda7eaea45a7f6bf4728472df77961cb45076c54c725d491fe1a42f3b8f740a71eef62dbdbad886caff534b9734a864104b3a6c146bf7dfcf72f3b8fed5c6ec13cce60c02fdad97b07cfdc7a9f084",
    },
    Beacon {
        round: 2183677,
        randomness: "73667223a0bcc2139c18d31df839df07dfeac359e0478954a397bb67185571e6",
        signature: "880d76f59dfb53fc48677936c95bddadfbf4c4954cf999c6cf13e462cc3b2294bd57a7af5d2128654b9ac2779e806ecc05994e74a650b15194dedbbfea7a7d10fcdaedb8a853540f98c8c8e0466a3dc971a6f9eca76266fe8993982cfde88533",
        previous_signature: "b2d7804b050cfaf332beb173d26c5ec01621caeea345927ac161d8f47f3f09ef14a5d2fd07fb9c5f6e5a0677bc44121505cc0230b0ec153bf195f343e52aafa317597f2ca617309eae61a67714b64afa36865542e069d407248e443e44996afc",
    },
    Beacon {
        round: 2183678,
        randomness: "e792784917a123cc1b54ef55756184e25f93a5d716de9079edf6f836b3318215",
        signature: "95892ef24716984539c6a0e9b732e110b7615b4753bcd0b44c43ae6a5c4c13d18c673c2dfb9853b0628114c5aea800bb0e166cfc4a600c30d2514040a49035eb2c5214d886b9b86369a1fbc5fd00c3e3d65a6053bb92cdcf96569068a515ba81",
        previous_signature: "880d76f59dfb53fc48677936c95bddadfbf4c4954cf999c6cf13e462cc3b2294bd57a7af5d2128654b9ac2779e806ecc05994e74a650b15194dedbbfea7a7d10fcdaedb8a853540f98c8c8e0466a3dc971a6f9eca76266fe8993982cfde88533",
    },
    Beacon {
        round: 2183679,
        randomness: "9a88a53e1c48634c22c14843e616cef9afdf02467501158d9f9f7b5378c1c2bb",
        signature: "a4e9a0199b85405ac4f51e843d07640c397c2e0ccd83f45c93c5a3a61d3d552be4c85c57c6965545286f181b7913374a193be7f37abc526975d67cddc50236142c93da4cca1953224d48f9f328fe644ba40c87debb829b4a9e2248919a8aa1cb",
        previous_signature: "95892ef24716984539c6a0e9b732e110b7615b4753bcd0b44c43ae6a5c4c13d18c673c2dfb9853b0628114c5aea800bb0e166cfc4a600c30d2514040a49035eb2c5214d886b9b86369a1fbc5fd00c3e3d65a6053bb92cdcf96569068a515ba81",
    },
    Beacon {
        round: 2183680,
        randomness: "ae37720e365186e1facbeab03dbcd2fcebdc95755b0f3717ed41fd5ede5d85b6",
        signature: "aad6368b84acc75146444104917250ed22c4caf95118526ea9615e4d866417d6c9cb585afb8a8b24c10429642b7fa6d0037856c861b97f9507c78875e33b07c8afcbc71e8323854519f47f66ed313736efb3753acedcf83970c94665d957a8e3",
        previous_signature: "a4e9a0199b85405ac4f51e843d07640c397c2e0ccd83f45c93c5a3a61d3d552be4c85c57c6965545286f181b7913374a193be7f37abc526975d67cddc50236142c93da4cca1953224d48f9f328fe644ba40c87debb829b4a9e2248919a8aa1cb",
    },
];
