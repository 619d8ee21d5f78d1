//! Case-mapping tables keyed by the big-endian packed UTF-8 bytes of a single
//! character. Values are the packed replacement bytes; replacements may be
//! longer or shorter than the key character (e.g. \u{00df} uppercases to "SS"
//! and \u{0130} lowercases to "i\u{0307}").
//!
//! Coverage is the simple one-to-one (plus a handful of one-to-many) mappings
//! for the Latin, Greek, Cyrillic, Armenian, Deseret, Osage, Warang Citi and
//! Adlam ranges. Entries are sorted by key so lookups can binary search.

pub(crate) static UPPERCASE: &[(u32, u64)] = &[
    (0x61, 0x41), (0x62, 0x42), (0x63, 0x43), (0x64, 0x44),
    (0x65, 0x45), (0x66, 0x46), (0x67, 0x47), (0x68, 0x48),
    (0x69, 0x49), (0x6a, 0x4a), (0x6b, 0x4b), (0x6c, 0x4c),
    (0x6d, 0x4d), (0x6e, 0x4e), (0x6f, 0x4f), (0x70, 0x50),
    (0x71, 0x51), (0x72, 0x52), (0x73, 0x53), (0x74, 0x54),
    (0x75, 0x55), (0x76, 0x56), (0x77, 0x57), (0x78, 0x58),
    (0x79, 0x59), (0x7a, 0x5a), (0xc2b5, 0xce9c), (0xc39f, 0x5353),
    (0xc3a0, 0xc380), (0xc3a1, 0xc381), (0xc3a2, 0xc382), (0xc3a3, 0xc383),
    (0xc3a4, 0xc384), (0xc3a5, 0xc385), (0xc3a6, 0xc386), (0xc3a7, 0xc387),
    (0xc3a8, 0xc388), (0xc3a9, 0xc389), (0xc3aa, 0xc38a), (0xc3ab, 0xc38b),
    (0xc3ac, 0xc38c), (0xc3ad, 0xc38d), (0xc3ae, 0xc38e), (0xc3af, 0xc38f),
    (0xc3b0, 0xc390), (0xc3b1, 0xc391), (0xc3b2, 0xc392), (0xc3b3, 0xc393),
    (0xc3b4, 0xc394), (0xc3b5, 0xc395), (0xc3b6, 0xc396), (0xc3b8, 0xc398),
    (0xc3b9, 0xc399), (0xc3ba, 0xc39a), (0xc3bb, 0xc39b), (0xc3bc, 0xc39c),
    (0xc3bd, 0xc39d), (0xc3be, 0xc39e), (0xc3bf, 0xc5b8), (0xc481, 0xc480),
    (0xc483, 0xc482), (0xc485, 0xc484), (0xc487, 0xc486), (0xc489, 0xc488),
    (0xc48b, 0xc48a), (0xc48d, 0xc48c), (0xc48f, 0xc48e), (0xc491, 0xc490),
    (0xc493, 0xc492), (0xc495, 0xc494), (0xc497, 0xc496), (0xc499, 0xc498),
    (0xc49b, 0xc49a), (0xc49d, 0xc49c), (0xc49f, 0xc49e), (0xc4a1, 0xc4a0),
    (0xc4a3, 0xc4a2), (0xc4a5, 0xc4a4), (0xc4a7, 0xc4a6), (0xc4a9, 0xc4a8),
    (0xc4ab, 0xc4aa), (0xc4ad, 0xc4ac), (0xc4af, 0xc4ae), (0xc4b1, 0x49),
    (0xc4b3, 0xc4b2), (0xc4b5, 0xc4b4), (0xc4b7, 0xc4b6), (0xc4ba, 0xc4b9),
    (0xc4bc, 0xc4bb), (0xc4be, 0xc4bd), (0xc580, 0xc4bf), (0xc582, 0xc581),
    (0xc584, 0xc583), (0xc586, 0xc585), (0xc588, 0xc587), (0xc589, 0xcabc4e),
    (0xc58b, 0xc58a), (0xc58d, 0xc58c), (0xc58f, 0xc58e), (0xc591, 0xc590),
    (0xc593, 0xc592), (0xc595, 0xc594), (0xc597, 0xc596), (0xc599, 0xc598),
    (0xc59b, 0xc59a), (0xc59d, 0xc59c), (0xc59f, 0xc59e), (0xc5a1, 0xc5a0),
    (0xc5a3, 0xc5a2), (0xc5a5, 0xc5a4), (0xc5a7, 0xc5a6), (0xc5a9, 0xc5a8),
    (0xc5ab, 0xc5aa), (0xc5ad, 0xc5ac), (0xc5af, 0xc5ae), (0xc5b1, 0xc5b0),
    (0xc5b3, 0xc5b2), (0xc5b5, 0xc5b4), (0xc5b7, 0xc5b6), (0xc5ba, 0xc5b9),
    (0xc5bc, 0xc5bb), (0xc5be, 0xc5bd), (0xc5bf, 0x53), (0xc680, 0xc983),
    (0xc683, 0xc682), (0xc685, 0xc684), (0xc688, 0xc687), (0xc68c, 0xc68b),
    (0xc692, 0xc691), (0xc695, 0xc7b6), (0xc699, 0xc698), (0xc69a, 0xc8bd),
    (0xc69e, 0xc8a0), (0xc6a1, 0xc6a0), (0xc6a3, 0xc6a2), (0xc6a5, 0xc6a4),
    (0xc6a8, 0xc6a7), (0xc6ad, 0xc6ac), (0xc6b0, 0xc6af), (0xc6b4, 0xc6b3),
    (0xc6b6, 0xc6b5), (0xc6b9, 0xc6b8), (0xc6bd, 0xc6bc), (0xc6bf, 0xc7b7),
    (0xc785, 0xc784), (0xc786, 0xc784), (0xc788, 0xc787), (0xc789, 0xc787),
    (0xc78b, 0xc78a), (0xc78c, 0xc78a), (0xc78e, 0xc78d), (0xc790, 0xc78f),
    (0xc792, 0xc791), (0xc794, 0xc793), (0xc796, 0xc795), (0xc798, 0xc797),
    (0xc79a, 0xc799), (0xc79c, 0xc79b), (0xc79d, 0xc68e), (0xc79f, 0xc79e),
    (0xc7a1, 0xc7a0), (0xc7a3, 0xc7a2), (0xc7a5, 0xc7a4), (0xc7a7, 0xc7a6),
    (0xc7a9, 0xc7a8), (0xc7ab, 0xc7aa), (0xc7ad, 0xc7ac), (0xc7af, 0xc7ae),
    (0xc7b0, 0x4acc8c), (0xc7b2, 0xc7b1), (0xc7b3, 0xc7b1), (0xc7b5, 0xc7b4),
    (0xc7b9, 0xc7b8), (0xc7bb, 0xc7ba), (0xc7bd, 0xc7bc), (0xc7bf, 0xc7be),
    (0xc881, 0xc880), (0xc883, 0xc882), (0xc885, 0xc884), (0xc887, 0xc886),
    (0xc889, 0xc888), (0xc88b, 0xc88a), (0xc88d, 0xc88c), (0xc88f, 0xc88e),
    (0xc891, 0xc890), (0xc893, 0xc892), (0xc895, 0xc894), (0xc897, 0xc896),
    (0xc899, 0xc898), (0xc89b, 0xc89a), (0xc89d, 0xc89c), (0xc89f, 0xc89e),
    (0xc8a3, 0xc8a2), (0xc8a5, 0xc8a4), (0xc8a7, 0xc8a6), (0xc8a9, 0xc8a8),
    (0xc8ab, 0xc8aa), (0xc8ad, 0xc8ac), (0xc8af, 0xc8ae), (0xc8b1, 0xc8b0),
    (0xc8b3, 0xc8b2), (0xc8bc, 0xc8bb), (0xc8bf, 0xe2b1be), (0xc980, 0xe2b1bf),
    (0xc982, 0xc981), (0xc987, 0xc986), (0xc989, 0xc988), (0xc98b, 0xc98a),
    (0xc98d, 0xc98c), (0xc98f, 0xc98e), (0xc990, 0xe2b1af), (0xc991, 0xe2b1ad),
    (0xc992, 0xe2b1b0), (0xc993, 0xc681), (0xc994, 0xc686), (0xc996, 0xc689),
    (0xc997, 0xc68a), (0xc999, 0xc68f), (0xc99b, 0xc690), (0xc99c, 0xea9eab),
    (0xc9a0, 0xc693), (0xc9a1, 0xea9eac), (0xc9a3, 0xc694), (0xc9a5, 0xea9e8d),
    (0xc9a6, 0xea9eaa), (0xc9a8, 0xc697), (0xc9a9, 0xc696), (0xc9aa, 0xea9eae),
    (0xc9ab, 0xe2b1a2), (0xc9ac, 0xea9ead), (0xc9af, 0xc69c), (0xc9b1, 0xe2b1ae),
    (0xc9b2, 0xc69d), (0xc9b5, 0xc69f), (0xc9bd, 0xe2b1a4), (0xca80, 0xc6a6),
    (0xca82, 0xea9f85), (0xca83, 0xc6a9), (0xca87, 0xea9eb1), (0xca88, 0xc6ae),
    (0xca89, 0xc984), (0xca8a, 0xc6b1), (0xca8b, 0xc6b2), (0xca8c, 0xc985),
    (0xca92, 0xc6b7), (0xca9d, 0xea9eb2), (0xca9e, 0xea9eb0), (0xcd85, 0xce99),
    (0xcdb1, 0xcdb0), (0xcdb3, 0xcdb2), (0xcdb7, 0xcdb6), (0xcdbb, 0xcfbd),
    (0xcdbc, 0xcfbe), (0xcdbd, 0xcfbf), (0xce90, 0xce99cc88cc81), (0xceac, 0xce86),
    (0xcead, 0xce88), (0xceae, 0xce89), (0xceaf, 0xce8a), (0xceb0, 0xcea5cc88cc81),
    (0xceb1, 0xce91), (0xceb2, 0xce92), (0xceb3, 0xce93), (0xceb4, 0xce94),
    (0xceb5, 0xce95), (0xceb6, 0xce96), (0xceb7, 0xce97), (0xceb8, 0xce98),
    (0xceb9, 0xce99), (0xceba, 0xce9a), (0xcebb, 0xce9b), (0xcebc, 0xce9c),
    (0xcebd, 0xce9d), (0xcebe, 0xce9e), (0xcebf, 0xce9f), (0xcf80, 0xcea0),
    (0xcf81, 0xcea1), (0xcf82, 0xcea3), (0xcf83, 0xcea3), (0xcf84, 0xcea4),
    (0xcf85, 0xcea5), (0xcf86, 0xcea6), (0xcf87, 0xcea7), (0xcf88, 0xcea8),
    (0xcf89, 0xcea9), (0xcf8a, 0xceaa), (0xcf8b, 0xceab), (0xcf8c, 0xce8c),
    (0xcf8d, 0xce8e), (0xcf8e, 0xce8f), (0xcf90, 0xce92), (0xcf91, 0xce98),
    (0xcf95, 0xcea6), (0xcf96, 0xcea0), (0xcf97, 0xcf8f), (0xcf99, 0xcf98),
    (0xcf9b, 0xcf9a), (0xcf9d, 0xcf9c), (0xcf9f, 0xcf9e), (0xcfa1, 0xcfa0),
    (0xcfa3, 0xcfa2), (0xcfa5, 0xcfa4), (0xcfa7, 0xcfa6), (0xcfa9, 0xcfa8),
    (0xcfab, 0xcfaa), (0xcfad, 0xcfac), (0xcfaf, 0xcfae), (0xcfb0, 0xce9a),
    (0xcfb1, 0xcea1), (0xcfb2, 0xcfb9), (0xcfb3, 0xcdbf), (0xcfb5, 0xce95),
    (0xcfb8, 0xcfb7), (0xcfbb, 0xcfba), (0xd0b0, 0xd090), (0xd0b1, 0xd091),
    (0xd0b2, 0xd092), (0xd0b3, 0xd093), (0xd0b4, 0xd094), (0xd0b5, 0xd095),
    (0xd0b6, 0xd096), (0xd0b7, 0xd097), (0xd0b8, 0xd098), (0xd0b9, 0xd099),
    (0xd0ba, 0xd09a), (0xd0bb, 0xd09b), (0xd0bc, 0xd09c), (0xd0bd, 0xd09d),
    (0xd0be, 0xd09e), (0xd0bf, 0xd09f), (0xd180, 0xd0a0), (0xd181, 0xd0a1),
    (0xd182, 0xd0a2), (0xd183, 0xd0a3), (0xd184, 0xd0a4), (0xd185, 0xd0a5),
    (0xd186, 0xd0a6), (0xd187, 0xd0a7), (0xd188, 0xd0a8), (0xd189, 0xd0a9),
    (0xd18a, 0xd0aa), (0xd18b, 0xd0ab), (0xd18c, 0xd0ac), (0xd18d, 0xd0ad),
    (0xd18e, 0xd0ae), (0xd18f, 0xd0af), (0xd190, 0xd080), (0xd191, 0xd081),
    (0xd192, 0xd082), (0xd193, 0xd083), (0xd194, 0xd084), (0xd195, 0xd085),
    (0xd196, 0xd086), (0xd197, 0xd087), (0xd198, 0xd088), (0xd199, 0xd089),
    (0xd19a, 0xd08a), (0xd19b, 0xd08b), (0xd19c, 0xd08c), (0xd19d, 0xd08d),
    (0xd19e, 0xd08e), (0xd19f, 0xd08f), (0xd1a1, 0xd1a0), (0xd1a3, 0xd1a2),
    (0xd1a5, 0xd1a4), (0xd1a7, 0xd1a6), (0xd1a9, 0xd1a8), (0xd1ab, 0xd1aa),
    (0xd1ad, 0xd1ac), (0xd1af, 0xd1ae), (0xd1b1, 0xd1b0), (0xd1b3, 0xd1b2),
    (0xd1b5, 0xd1b4), (0xd1b7, 0xd1b6), (0xd1b9, 0xd1b8), (0xd1bb, 0xd1ba),
    (0xd1bd, 0xd1bc), (0xd1bf, 0xd1be), (0xd281, 0xd280), (0xd28b, 0xd28a),
    (0xd28d, 0xd28c), (0xd28f, 0xd28e), (0xd291, 0xd290), (0xd293, 0xd292),
    (0xd295, 0xd294), (0xd297, 0xd296), (0xd299, 0xd298), (0xd29b, 0xd29a),
    (0xd29d, 0xd29c), (0xd29f, 0xd29e), (0xd2a1, 0xd2a0), (0xd2a3, 0xd2a2),
    (0xd2a5, 0xd2a4), (0xd2a7, 0xd2a6), (0xd2a9, 0xd2a8), (0xd2ab, 0xd2aa),
    (0xd2ad, 0xd2ac), (0xd2af, 0xd2ae), (0xd2b1, 0xd2b0), (0xd2b3, 0xd2b2),
    (0xd2b5, 0xd2b4), (0xd2b7, 0xd2b6), (0xd2b9, 0xd2b8), (0xd2bb, 0xd2ba),
    (0xd2bd, 0xd2bc), (0xd2bf, 0xd2be), (0xd382, 0xd381), (0xd384, 0xd383),
    (0xd386, 0xd385), (0xd388, 0xd387), (0xd38a, 0xd389), (0xd38c, 0xd38b),
    (0xd38e, 0xd38d), (0xd38f, 0xd380), (0xd391, 0xd390), (0xd393, 0xd392),
    (0xd395, 0xd394), (0xd397, 0xd396), (0xd399, 0xd398), (0xd39b, 0xd39a),
    (0xd39d, 0xd39c), (0xd39f, 0xd39e), (0xd3a1, 0xd3a0), (0xd3a3, 0xd3a2),
    (0xd3a5, 0xd3a4), (0xd3a7, 0xd3a6), (0xd3a9, 0xd3a8), (0xd3ab, 0xd3aa),
    (0xd3ad, 0xd3ac), (0xd3af, 0xd3ae), (0xd3b1, 0xd3b0), (0xd3b3, 0xd3b2),
    (0xd3b5, 0xd3b4), (0xd3b7, 0xd3b6), (0xd3b9, 0xd3b8), (0xd3bb, 0xd3ba),
    (0xd3bd, 0xd3bc), (0xd3bf, 0xd3be), (0xd481, 0xd480), (0xd483, 0xd482),
    (0xd485, 0xd484), (0xd487, 0xd486), (0xd489, 0xd488), (0xd48b, 0xd48a),
    (0xd48d, 0xd48c), (0xd48f, 0xd48e), (0xd491, 0xd490), (0xd493, 0xd492),
    (0xd495, 0xd494), (0xd497, 0xd496), (0xd499, 0xd498), (0xd49b, 0xd49a),
    (0xd49d, 0xd49c), (0xd49f, 0xd49e), (0xd4a1, 0xd4a0), (0xd4a3, 0xd4a2),
    (0xd4a5, 0xd4a4), (0xd4a7, 0xd4a6), (0xd4a9, 0xd4a8), (0xd4ab, 0xd4aa),
    (0xd4ad, 0xd4ac), (0xd4af, 0xd4ae), (0xd5a1, 0xd4b1), (0xd5a2, 0xd4b2),
    (0xd5a3, 0xd4b3), (0xd5a4, 0xd4b4), (0xd5a5, 0xd4b5), (0xd5a6, 0xd4b6),
    (0xd5a7, 0xd4b7), (0xd5a8, 0xd4b8), (0xd5a9, 0xd4b9), (0xd5aa, 0xd4ba),
    (0xd5ab, 0xd4bb), (0xd5ac, 0xd4bc), (0xd5ad, 0xd4bd), (0xd5ae, 0xd4be),
    (0xd5af, 0xd4bf), (0xd5b0, 0xd580), (0xd5b1, 0xd581), (0xd5b2, 0xd582),
    (0xd5b3, 0xd583), (0xd5b4, 0xd584), (0xd5b5, 0xd585), (0xd5b6, 0xd586),
    (0xd5b7, 0xd587), (0xd5b8, 0xd588), (0xd5b9, 0xd589), (0xd5ba, 0xd58a),
    (0xd5bb, 0xd58b), (0xd5bc, 0xd58c), (0xd5bd, 0xd58d), (0xd5be, 0xd58e),
    (0xd5bf, 0xd58f), (0xd680, 0xd590), (0xd681, 0xd591), (0xd682, 0xd592),
    (0xd683, 0xd593), (0xd684, 0xd594), (0xd685, 0xd595), (0xd686, 0xd596),
    (0xd687, 0xd4b5d592), (0xf09090a8, 0xf0909080), (0xf09090a9, 0xf0909081), (0xf09090aa, 0xf0909082),
    (0xf09090ab, 0xf0909083), (0xf09090ac, 0xf0909084), (0xf09090ad, 0xf0909085), (0xf09090ae, 0xf0909086),
    (0xf09090af, 0xf0909087), (0xf09090b0, 0xf0909088), (0xf09090b1, 0xf0909089), (0xf09090b2, 0xf090908a),
    (0xf09090b3, 0xf090908b), (0xf09090b4, 0xf090908c), (0xf09090b5, 0xf090908d), (0xf09090b6, 0xf090908e),
    (0xf09090b7, 0xf090908f), (0xf09090b8, 0xf0909090), (0xf09090b9, 0xf0909091), (0xf09090ba, 0xf0909092),
    (0xf09090bb, 0xf0909093), (0xf09090bc, 0xf0909094), (0xf09090bd, 0xf0909095), (0xf09090be, 0xf0909096),
    (0xf09090bf, 0xf0909097), (0xf0909180, 0xf0909098), (0xf0909181, 0xf0909099), (0xf0909182, 0xf090909a),
    (0xf0909183, 0xf090909b), (0xf0909184, 0xf090909c), (0xf0909185, 0xf090909d), (0xf0909186, 0xf090909e),
    (0xf0909187, 0xf090909f), (0xf0909188, 0xf09090a0), (0xf0909189, 0xf09090a1), (0xf090918a, 0xf09090a2),
    (0xf090918b, 0xf09090a3), (0xf090918c, 0xf09090a4), (0xf090918d, 0xf09090a5), (0xf090918e, 0xf09090a6),
    (0xf090918f, 0xf09090a7), (0xf0909398, 0xf09092b0), (0xf0909399, 0xf09092b1), (0xf090939a, 0xf09092b2),
    (0xf090939b, 0xf09092b3), (0xf090939c, 0xf09092b4), (0xf090939d, 0xf09092b5), (0xf090939e, 0xf09092b6),
    (0xf090939f, 0xf09092b7), (0xf09093a0, 0xf09092b8), (0xf09093a1, 0xf09092b9), (0xf09093a2, 0xf09092ba),
    (0xf09093a3, 0xf09092bb), (0xf09093a4, 0xf09092bc), (0xf09093a5, 0xf09092bd), (0xf09093a6, 0xf09092be),
    (0xf09093a7, 0xf09092bf), (0xf09093a8, 0xf0909380), (0xf09093a9, 0xf0909381), (0xf09093aa, 0xf0909382),
    (0xf09093ab, 0xf0909383), (0xf09093ac, 0xf0909384), (0xf09093ad, 0xf0909385), (0xf09093ae, 0xf0909386),
    (0xf09093af, 0xf0909387), (0xf09093b0, 0xf0909388), (0xf09093b1, 0xf0909389), (0xf09093b2, 0xf090938a),
    (0xf09093b3, 0xf090938b), (0xf09093b4, 0xf090938c), (0xf09093b5, 0xf090938d), (0xf09093b6, 0xf090938e),
    (0xf09093b7, 0xf090938f), (0xf09093b8, 0xf0909390), (0xf09093b9, 0xf0909391), (0xf09093ba, 0xf0909392),
    (0xf09093bb, 0xf0909393), (0xf0909697, 0xf09095b0), (0xf0909698, 0xf09095b1), (0xf0909699, 0xf09095b2),
    (0xf090969a, 0xf09095b3), (0xf090969b, 0xf09095b4), (0xf090969c, 0xf09095b5), (0xf090969d, 0xf09095b6),
    (0xf090969e, 0xf09095b7), (0xf090969f, 0xf09095b8), (0xf09096a0, 0xf09095b9), (0xf09096a1, 0xf09095ba),
    (0xf09096a3, 0xf09095bc), (0xf09096a4, 0xf09095bd), (0xf09096a5, 0xf09095be), (0xf09096a6, 0xf09095bf),
    (0xf09096a7, 0xf0909680), (0xf09096a8, 0xf0909681), (0xf09096a9, 0xf0909682), (0xf09096aa, 0xf0909683),
    (0xf09096ab, 0xf0909684), (0xf09096ac, 0xf0909685), (0xf09096ad, 0xf0909686), (0xf09096ae, 0xf0909687),
    (0xf09096af, 0xf0909688), (0xf09096b0, 0xf0909689), (0xf09096b1, 0xf090968a), (0xf09096b3, 0xf090968c),
    (0xf09096b4, 0xf090968d), (0xf09096b5, 0xf090968e), (0xf09096b6, 0xf090968f), (0xf09096b7, 0xf0909690),
    (0xf09096b8, 0xf0909691), (0xf09096b9, 0xf0909692), (0xf09096bb, 0xf0909694), (0xf09096bc, 0xf0909695),
    (0xf090b380, 0xf090b280), (0xf090b381, 0xf090b281), (0xf090b382, 0xf090b282), (0xf090b383, 0xf090b283),
    (0xf090b384, 0xf090b284), (0xf090b385, 0xf090b285), (0xf090b386, 0xf090b286), (0xf090b387, 0xf090b287),
    (0xf090b388, 0xf090b288), (0xf090b389, 0xf090b289), (0xf090b38a, 0xf090b28a), (0xf090b38b, 0xf090b28b),
    (0xf090b38c, 0xf090b28c), (0xf090b38d, 0xf090b28d), (0xf090b38e, 0xf090b28e), (0xf090b38f, 0xf090b28f),
    (0xf090b390, 0xf090b290), (0xf090b391, 0xf090b291), (0xf090b392, 0xf090b292), (0xf090b393, 0xf090b293),
    (0xf090b394, 0xf090b294), (0xf090b395, 0xf090b295), (0xf090b396, 0xf090b296), (0xf090b397, 0xf090b297),
    (0xf090b398, 0xf090b298), (0xf090b399, 0xf090b299), (0xf090b39a, 0xf090b29a), (0xf090b39b, 0xf090b29b),
    (0xf090b39c, 0xf090b29c), (0xf090b39d, 0xf090b29d), (0xf090b39e, 0xf090b29e), (0xf090b39f, 0xf090b29f),
    (0xf090b3a0, 0xf090b2a0), (0xf090b3a1, 0xf090b2a1), (0xf090b3a2, 0xf090b2a2), (0xf090b3a3, 0xf090b2a3),
    (0xf090b3a4, 0xf090b2a4), (0xf090b3a5, 0xf090b2a5), (0xf090b3a6, 0xf090b2a6), (0xf090b3a7, 0xf090b2a7),
    (0xf090b3a8, 0xf090b2a8), (0xf090b3a9, 0xf090b2a9), (0xf090b3aa, 0xf090b2aa), (0xf090b3ab, 0xf090b2ab),
    (0xf090b3ac, 0xf090b2ac), (0xf090b3ad, 0xf090b2ad), (0xf090b3ae, 0xf090b2ae), (0xf090b3af, 0xf090b2af),
    (0xf090b3b0, 0xf090b2b0), (0xf090b3b1, 0xf090b2b1), (0xf090b3b2, 0xf090b2b2), (0xf091a380, 0xf091a2a0),
    (0xf091a381, 0xf091a2a1), (0xf091a382, 0xf091a2a2), (0xf091a383, 0xf091a2a3), (0xf091a384, 0xf091a2a4),
    (0xf091a385, 0xf091a2a5), (0xf091a386, 0xf091a2a6), (0xf091a387, 0xf091a2a7), (0xf091a388, 0xf091a2a8),
    (0xf091a389, 0xf091a2a9), (0xf091a38a, 0xf091a2aa), (0xf091a38b, 0xf091a2ab), (0xf091a38c, 0xf091a2ac),
    (0xf091a38d, 0xf091a2ad), (0xf091a38e, 0xf091a2ae), (0xf091a38f, 0xf091a2af), (0xf091a390, 0xf091a2b0),
    (0xf091a391, 0xf091a2b1), (0xf091a392, 0xf091a2b2), (0xf091a393, 0xf091a2b3), (0xf091a394, 0xf091a2b4),
    (0xf091a395, 0xf091a2b5), (0xf091a396, 0xf091a2b6), (0xf091a397, 0xf091a2b7), (0xf091a398, 0xf091a2b8),
    (0xf091a399, 0xf091a2b9), (0xf091a39a, 0xf091a2ba), (0xf091a39b, 0xf091a2bb), (0xf091a39c, 0xf091a2bc),
    (0xf091a39d, 0xf091a2bd), (0xf091a39e, 0xf091a2be), (0xf091a39f, 0xf091a2bf), (0xf096b9a0, 0xf096b980),
    (0xf096b9a1, 0xf096b981), (0xf096b9a2, 0xf096b982), (0xf096b9a3, 0xf096b983), (0xf096b9a4, 0xf096b984),
    (0xf096b9a5, 0xf096b985), (0xf096b9a6, 0xf096b986), (0xf096b9a7, 0xf096b987), (0xf096b9a8, 0xf096b988),
    (0xf096b9a9, 0xf096b989), (0xf096b9aa, 0xf096b98a), (0xf096b9ab, 0xf096b98b), (0xf096b9ac, 0xf096b98c),
    (0xf096b9ad, 0xf096b98d), (0xf096b9ae, 0xf096b98e), (0xf096b9af, 0xf096b98f), (0xf096b9b0, 0xf096b990),
    (0xf096b9b1, 0xf096b991), (0xf096b9b2, 0xf096b992), (0xf096b9b3, 0xf096b993), (0xf096b9b4, 0xf096b994),
    (0xf096b9b5, 0xf096b995), (0xf096b9b6, 0xf096b996), (0xf096b9b7, 0xf096b997), (0xf096b9b8, 0xf096b998),
    (0xf096b9b9, 0xf096b999), (0xf096b9ba, 0xf096b99a), (0xf096b9bb, 0xf096b99b), (0xf096b9bc, 0xf096b99c),
    (0xf096b9bd, 0xf096b99d), (0xf096b9be, 0xf096b99e), (0xf096b9bf, 0xf096b99f), (0xf09ea4a2, 0xf09ea480),
    (0xf09ea4a3, 0xf09ea481), (0xf09ea4a4, 0xf09ea482), (0xf09ea4a5, 0xf09ea483), (0xf09ea4a6, 0xf09ea484),
    (0xf09ea4a7, 0xf09ea485), (0xf09ea4a8, 0xf09ea486), (0xf09ea4a9, 0xf09ea487), (0xf09ea4aa, 0xf09ea488),
    (0xf09ea4ab, 0xf09ea489), (0xf09ea4ac, 0xf09ea48a), (0xf09ea4ad, 0xf09ea48b), (0xf09ea4ae, 0xf09ea48c),
    (0xf09ea4af, 0xf09ea48d), (0xf09ea4b0, 0xf09ea48e), (0xf09ea4b1, 0xf09ea48f), (0xf09ea4b2, 0xf09ea490),
    (0xf09ea4b3, 0xf09ea491), (0xf09ea4b4, 0xf09ea492), (0xf09ea4b5, 0xf09ea493), (0xf09ea4b6, 0xf09ea494),
    (0xf09ea4b7, 0xf09ea495), (0xf09ea4b8, 0xf09ea496), (0xf09ea4b9, 0xf09ea497), (0xf09ea4ba, 0xf09ea498),
    (0xf09ea4bb, 0xf09ea499), (0xf09ea4bc, 0xf09ea49a), (0xf09ea4bd, 0xf09ea49b), (0xf09ea4be, 0xf09ea49c),
    (0xf09ea4bf, 0xf09ea49d), (0xf09ea580, 0xf09ea49e), (0xf09ea581, 0xf09ea49f), (0xf09ea582, 0xf09ea4a0),
    (0xf09ea583, 0xf09ea4a1),
];

pub(crate) static LOWERCASE: &[(u32, u64)] = &[
    (0x41, 0x61), (0x42, 0x62), (0x43, 0x63), (0x44, 0x64),
    (0x45, 0x65), (0x46, 0x66), (0x47, 0x67), (0x48, 0x68),
    (0x49, 0x69), (0x4a, 0x6a), (0x4b, 0x6b), (0x4c, 0x6c),
    (0x4d, 0x6d), (0x4e, 0x6e), (0x4f, 0x6f), (0x50, 0x70),
    (0x51, 0x71), (0x52, 0x72), (0x53, 0x73), (0x54, 0x74),
    (0x55, 0x75), (0x56, 0x76), (0x57, 0x77), (0x58, 0x78),
    (0x59, 0x79), (0x5a, 0x7a), (0xc380, 0xc3a0), (0xc381, 0xc3a1),
    (0xc382, 0xc3a2), (0xc383, 0xc3a3), (0xc384, 0xc3a4), (0xc385, 0xc3a5),
    (0xc386, 0xc3a6), (0xc387, 0xc3a7), (0xc388, 0xc3a8), (0xc389, 0xc3a9),
    (0xc38a, 0xc3aa), (0xc38b, 0xc3ab), (0xc38c, 0xc3ac), (0xc38d, 0xc3ad),
    (0xc38e, 0xc3ae), (0xc38f, 0xc3af), (0xc390, 0xc3b0), (0xc391, 0xc3b1),
    (0xc392, 0xc3b2), (0xc393, 0xc3b3), (0xc394, 0xc3b4), (0xc395, 0xc3b5),
    (0xc396, 0xc3b6), (0xc398, 0xc3b8), (0xc399, 0xc3b9), (0xc39a, 0xc3ba),
    (0xc39b, 0xc3bb), (0xc39c, 0xc3bc), (0xc39d, 0xc3bd), (0xc39e, 0xc3be),
    (0xc480, 0xc481), (0xc482, 0xc483), (0xc484, 0xc485), (0xc486, 0xc487),
    (0xc488, 0xc489), (0xc48a, 0xc48b), (0xc48c, 0xc48d), (0xc48e, 0xc48f),
    (0xc490, 0xc491), (0xc492, 0xc493), (0xc494, 0xc495), (0xc496, 0xc497),
    (0xc498, 0xc499), (0xc49a, 0xc49b), (0xc49c, 0xc49d), (0xc49e, 0xc49f),
    (0xc4a0, 0xc4a1), (0xc4a2, 0xc4a3), (0xc4a4, 0xc4a5), (0xc4a6, 0xc4a7),
    (0xc4a8, 0xc4a9), (0xc4aa, 0xc4ab), (0xc4ac, 0xc4ad), (0xc4ae, 0xc4af),
    (0xc4b0, 0x69cc87), (0xc4b2, 0xc4b3), (0xc4b4, 0xc4b5), (0xc4b6, 0xc4b7),
    (0xc4b9, 0xc4ba), (0xc4bb, 0xc4bc), (0xc4bd, 0xc4be), (0xc4bf, 0xc580),
    (0xc581, 0xc582), (0xc583, 0xc584), (0xc585, 0xc586), (0xc587, 0xc588),
    (0xc58a, 0xc58b), (0xc58c, 0xc58d), (0xc58e, 0xc58f), (0xc590, 0xc591),
    (0xc592, 0xc593), (0xc594, 0xc595), (0xc596, 0xc597), (0xc598, 0xc599),
    (0xc59a, 0xc59b), (0xc59c, 0xc59d), (0xc59e, 0xc59f), (0xc5a0, 0xc5a1),
    (0xc5a2, 0xc5a3), (0xc5a4, 0xc5a5), (0xc5a6, 0xc5a7), (0xc5a8, 0xc5a9),
    (0xc5aa, 0xc5ab), (0xc5ac, 0xc5ad), (0xc5ae, 0xc5af), (0xc5b0, 0xc5b1),
    (0xc5b2, 0xc5b3), (0xc5b4, 0xc5b5), (0xc5b6, 0xc5b7), (0xc5b8, 0xc3bf),
    (0xc5b9, 0xc5ba), (0xc5bb, 0xc5bc), (0xc5bd, 0xc5be), (0xc681, 0xc993),
    (0xc682, 0xc683), (0xc684, 0xc685), (0xc686, 0xc994), (0xc687, 0xc688),
    (0xc689, 0xc996), (0xc68a, 0xc997), (0xc68b, 0xc68c), (0xc68e, 0xc79d),
    (0xc68f, 0xc999), (0xc690, 0xc99b), (0xc691, 0xc692), (0xc693, 0xc9a0),
    (0xc694, 0xc9a3), (0xc696, 0xc9a9), (0xc697, 0xc9a8), (0xc698, 0xc699),
    (0xc69c, 0xc9af), (0xc69d, 0xc9b2), (0xc69f, 0xc9b5), (0xc6a0, 0xc6a1),
    (0xc6a2, 0xc6a3), (0xc6a4, 0xc6a5), (0xc6a6, 0xca80), (0xc6a7, 0xc6a8),
    (0xc6a9, 0xca83), (0xc6ac, 0xc6ad), (0xc6ae, 0xca88), (0xc6af, 0xc6b0),
    (0xc6b1, 0xca8a), (0xc6b2, 0xca8b), (0xc6b3, 0xc6b4), (0xc6b5, 0xc6b6),
    (0xc6b7, 0xca92), (0xc6b8, 0xc6b9), (0xc6bc, 0xc6bd), (0xc784, 0xc786),
    (0xc785, 0xc786), (0xc787, 0xc789), (0xc788, 0xc789), (0xc78a, 0xc78c),
    (0xc78b, 0xc78c), (0xc78d, 0xc78e), (0xc78f, 0xc790), (0xc791, 0xc792),
    (0xc793, 0xc794), (0xc795, 0xc796), (0xc797, 0xc798), (0xc799, 0xc79a),
    (0xc79b, 0xc79c), (0xc79e, 0xc79f), (0xc7a0, 0xc7a1), (0xc7a2, 0xc7a3),
    (0xc7a4, 0xc7a5), (0xc7a6, 0xc7a7), (0xc7a8, 0xc7a9), (0xc7aa, 0xc7ab),
    (0xc7ac, 0xc7ad), (0xc7ae, 0xc7af), (0xc7b1, 0xc7b3), (0xc7b2, 0xc7b3),
    (0xc7b4, 0xc7b5), (0xc7b6, 0xc695), (0xc7b7, 0xc6bf), (0xc7b8, 0xc7b9),
    (0xc7ba, 0xc7bb), (0xc7bc, 0xc7bd), (0xc7be, 0xc7bf), (0xc880, 0xc881),
    (0xc882, 0xc883), (0xc884, 0xc885), (0xc886, 0xc887), (0xc888, 0xc889),
    (0xc88a, 0xc88b), (0xc88c, 0xc88d), (0xc88e, 0xc88f), (0xc890, 0xc891),
    (0xc892, 0xc893), (0xc894, 0xc895), (0xc896, 0xc897), (0xc898, 0xc899),
    (0xc89a, 0xc89b), (0xc89c, 0xc89d), (0xc89e, 0xc89f), (0xc8a0, 0xc69e),
    (0xc8a2, 0xc8a3), (0xc8a4, 0xc8a5), (0xc8a6, 0xc8a7), (0xc8a8, 0xc8a9),
    (0xc8aa, 0xc8ab), (0xc8ac, 0xc8ad), (0xc8ae, 0xc8af), (0xc8b0, 0xc8b1),
    (0xc8b2, 0xc8b3), (0xc8ba, 0xe2b1a5), (0xc8bb, 0xc8bc), (0xc8bd, 0xc69a),
    (0xc8be, 0xe2b1a6), (0xc981, 0xc982), (0xc983, 0xc680), (0xc984, 0xca89),
    (0xc985, 0xca8c), (0xc986, 0xc987), (0xc988, 0xc989), (0xc98a, 0xc98b),
    (0xc98c, 0xc98d), (0xc98e, 0xc98f), (0xcdb0, 0xcdb1), (0xcdb2, 0xcdb3),
    (0xcdb6, 0xcdb7), (0xcdbf, 0xcfb3), (0xce86, 0xceac), (0xce88, 0xcead),
    (0xce89, 0xceae), (0xce8a, 0xceaf), (0xce8c, 0xcf8c), (0xce8e, 0xcf8d),
    (0xce8f, 0xcf8e), (0xce91, 0xceb1), (0xce92, 0xceb2), (0xce93, 0xceb3),
    (0xce94, 0xceb4), (0xce95, 0xceb5), (0xce96, 0xceb6), (0xce97, 0xceb7),
    (0xce98, 0xceb8), (0xce99, 0xceb9), (0xce9a, 0xceba), (0xce9b, 0xcebb),
    (0xce9c, 0xcebc), (0xce9d, 0xcebd), (0xce9e, 0xcebe), (0xce9f, 0xcebf),
    (0xcea0, 0xcf80), (0xcea1, 0xcf81), (0xcea3, 0xcf83), (0xcea4, 0xcf84),
    (0xcea5, 0xcf85), (0xcea6, 0xcf86), (0xcea7, 0xcf87), (0xcea8, 0xcf88),
    (0xcea9, 0xcf89), (0xceaa, 0xcf8a), (0xceab, 0xcf8b), (0xcf8f, 0xcf97),
    (0xcf98, 0xcf99), (0xcf9a, 0xcf9b), (0xcf9c, 0xcf9d), (0xcf9e, 0xcf9f),
    (0xcfa0, 0xcfa1), (0xcfa2, 0xcfa3), (0xcfa4, 0xcfa5), (0xcfa6, 0xcfa7),
    (0xcfa8, 0xcfa9), (0xcfaa, 0xcfab), (0xcfac, 0xcfad), (0xcfae, 0xcfaf),
    (0xcfb4, 0xceb8), (0xcfb7, 0xcfb8), (0xcfb9, 0xcfb2), (0xcfba, 0xcfbb),
    (0xcfbd, 0xcdbb), (0xcfbe, 0xcdbc), (0xcfbf, 0xcdbd), (0xd080, 0xd190),
    (0xd081, 0xd191), (0xd082, 0xd192), (0xd083, 0xd193), (0xd084, 0xd194),
    (0xd085, 0xd195), (0xd086, 0xd196), (0xd087, 0xd197), (0xd088, 0xd198),
    (0xd089, 0xd199), (0xd08a, 0xd19a), (0xd08b, 0xd19b), (0xd08c, 0xd19c),
    (0xd08d, 0xd19d), (0xd08e, 0xd19e), (0xd08f, 0xd19f), (0xd090, 0xd0b0),
    (0xd091, 0xd0b1), (0xd092, 0xd0b2), (0xd093, 0xd0b3), (0xd094, 0xd0b4),
    (0xd095, 0xd0b5), (0xd096, 0xd0b6), (0xd097, 0xd0b7), (0xd098, 0xd0b8),
    (0xd099, 0xd0b9), (0xd09a, 0xd0ba), (0xd09b, 0xd0bb), (0xd09c, 0xd0bc),
    (0xd09d, 0xd0bd), (0xd09e, 0xd0be), (0xd09f, 0xd0bf), (0xd0a0, 0xd180),
    (0xd0a1, 0xd181), (0xd0a2, 0xd182), (0xd0a3, 0xd183), (0xd0a4, 0xd184),
    (0xd0a5, 0xd185), (0xd0a6, 0xd186), (0xd0a7, 0xd187), (0xd0a8, 0xd188),
    (0xd0a9, 0xd189), (0xd0aa, 0xd18a), (0xd0ab, 0xd18b), (0xd0ac, 0xd18c),
    (0xd0ad, 0xd18d), (0xd0ae, 0xd18e), (0xd0af, 0xd18f), (0xd1a0, 0xd1a1),
    (0xd1a2, 0xd1a3), (0xd1a4, 0xd1a5), (0xd1a6, 0xd1a7), (0xd1a8, 0xd1a9),
    (0xd1aa, 0xd1ab), (0xd1ac, 0xd1ad), (0xd1ae, 0xd1af), (0xd1b0, 0xd1b1),
    (0xd1b2, 0xd1b3), (0xd1b4, 0xd1b5), (0xd1b6, 0xd1b7), (0xd1b8, 0xd1b9),
    (0xd1ba, 0xd1bb), (0xd1bc, 0xd1bd), (0xd1be, 0xd1bf), (0xd280, 0xd281),
    (0xd28a, 0xd28b), (0xd28c, 0xd28d), (0xd28e, 0xd28f), (0xd290, 0xd291),
    (0xd292, 0xd293), (0xd294, 0xd295), (0xd296, 0xd297), (0xd298, 0xd299),
    (0xd29a, 0xd29b), (0xd29c, 0xd29d), (0xd29e, 0xd29f), (0xd2a0, 0xd2a1),
    (0xd2a2, 0xd2a3), (0xd2a4, 0xd2a5), (0xd2a6, 0xd2a7), (0xd2a8, 0xd2a9),
    (0xd2aa, 0xd2ab), (0xd2ac, 0xd2ad), (0xd2ae, 0xd2af), (0xd2b0, 0xd2b1),
    (0xd2b2, 0xd2b3), (0xd2b4, 0xd2b5), (0xd2b6, 0xd2b7), (0xd2b8, 0xd2b9),
    (0xd2ba, 0xd2bb), (0xd2bc, 0xd2bd), (0xd2be, 0xd2bf), (0xd380, 0xd38f),
    (0xd381, 0xd382), (0xd383, 0xd384), (0xd385, 0xd386), (0xd387, 0xd388),
    (0xd389, 0xd38a), (0xd38b, 0xd38c), (0xd38d, 0xd38e), (0xd390, 0xd391),
    (0xd392, 0xd393), (0xd394, 0xd395), (0xd396, 0xd397), (0xd398, 0xd399),
    (0xd39a, 0xd39b), (0xd39c, 0xd39d), (0xd39e, 0xd39f), (0xd3a0, 0xd3a1),
    (0xd3a2, 0xd3a3), (0xd3a4, 0xd3a5), (0xd3a6, 0xd3a7), (0xd3a8, 0xd3a9),
    (0xd3aa, 0xd3ab), (0xd3ac, 0xd3ad), (0xd3ae, 0xd3af), (0xd3b0, 0xd3b1),
    (0xd3b2, 0xd3b3), (0xd3b4, 0xd3b5), (0xd3b6, 0xd3b7), (0xd3b8, 0xd3b9),
    (0xd3ba, 0xd3bb), (0xd3bc, 0xd3bd), (0xd3be, 0xd3bf), (0xd480, 0xd481),
    (0xd482, 0xd483), (0xd484, 0xd485), (0xd486, 0xd487), (0xd488, 0xd489),
    (0xd48a, 0xd48b), (0xd48c, 0xd48d), (0xd48e, 0xd48f), (0xd490, 0xd491),
    (0xd492, 0xd493), (0xd494, 0xd495), (0xd496, 0xd497), (0xd498, 0xd499),
    (0xd49a, 0xd49b), (0xd49c, 0xd49d), (0xd49e, 0xd49f), (0xd4a0, 0xd4a1),
    (0xd4a2, 0xd4a3), (0xd4a4, 0xd4a5), (0xd4a6, 0xd4a7), (0xd4a8, 0xd4a9),
    (0xd4aa, 0xd4ab), (0xd4ac, 0xd4ad), (0xd4ae, 0xd4af), (0xd4b1, 0xd5a1),
    (0xd4b2, 0xd5a2), (0xd4b3, 0xd5a3), (0xd4b4, 0xd5a4), (0xd4b5, 0xd5a5),
    (0xd4b6, 0xd5a6), (0xd4b7, 0xd5a7), (0xd4b8, 0xd5a8), (0xd4b9, 0xd5a9),
    (0xd4ba, 0xd5aa), (0xd4bb, 0xd5ab), (0xd4bc, 0xd5ac), (0xd4bd, 0xd5ad),
    (0xd4be, 0xd5ae), (0xd4bf, 0xd5af), (0xd580, 0xd5b0), (0xd581, 0xd5b1),
    (0xd582, 0xd5b2), (0xd583, 0xd5b3), (0xd584, 0xd5b4), (0xd585, 0xd5b5),
    (0xd586, 0xd5b6), (0xd587, 0xd5b7), (0xd588, 0xd5b8), (0xd589, 0xd5b9),
    (0xd58a, 0xd5ba), (0xd58b, 0xd5bb), (0xd58c, 0xd5bc), (0xd58d, 0xd5bd),
    (0xd58e, 0xd5be), (0xd58f, 0xd5bf), (0xd590, 0xd680), (0xd591, 0xd681),
    (0xd592, 0xd682), (0xd593, 0xd683), (0xd594, 0xd684), (0xd595, 0xd685),
    (0xd596, 0xd686), (0xf0909080, 0xf09090a8), (0xf0909081, 0xf09090a9), (0xf0909082, 0xf09090aa),
    (0xf0909083, 0xf09090ab), (0xf0909084, 0xf09090ac), (0xf0909085, 0xf09090ad), (0xf0909086, 0xf09090ae),
    (0xf0909087, 0xf09090af), (0xf0909088, 0xf09090b0), (0xf0909089, 0xf09090b1), (0xf090908a, 0xf09090b2),
    (0xf090908b, 0xf09090b3), (0xf090908c, 0xf09090b4), (0xf090908d, 0xf09090b5), (0xf090908e, 0xf09090b6),
    (0xf090908f, 0xf09090b7), (0xf0909090, 0xf09090b8), (0xf0909091, 0xf09090b9), (0xf0909092, 0xf09090ba),
    (0xf0909093, 0xf09090bb), (0xf0909094, 0xf09090bc), (0xf0909095, 0xf09090bd), (0xf0909096, 0xf09090be),
    (0xf0909097, 0xf09090bf), (0xf0909098, 0xf0909180), (0xf0909099, 0xf0909181), (0xf090909a, 0xf0909182),
    (0xf090909b, 0xf0909183), (0xf090909c, 0xf0909184), (0xf090909d, 0xf0909185), (0xf090909e, 0xf0909186),
    (0xf090909f, 0xf0909187), (0xf09090a0, 0xf0909188), (0xf09090a1, 0xf0909189), (0xf09090a2, 0xf090918a),
    (0xf09090a3, 0xf090918b), (0xf09090a4, 0xf090918c), (0xf09090a5, 0xf090918d), (0xf09090a6, 0xf090918e),
    (0xf09090a7, 0xf090918f), (0xf09092b0, 0xf0909398), (0xf09092b1, 0xf0909399), (0xf09092b2, 0xf090939a),
    (0xf09092b3, 0xf090939b), (0xf09092b4, 0xf090939c), (0xf09092b5, 0xf090939d), (0xf09092b6, 0xf090939e),
    (0xf09092b7, 0xf090939f), (0xf09092b8, 0xf09093a0), (0xf09092b9, 0xf09093a1), (0xf09092ba, 0xf09093a2),
    (0xf09092bb, 0xf09093a3), (0xf09092bc, 0xf09093a4), (0xf09092bd, 0xf09093a5), (0xf09092be, 0xf09093a6),
    (0xf09092bf, 0xf09093a7), (0xf0909380, 0xf09093a8), (0xf0909381, 0xf09093a9), (0xf0909382, 0xf09093aa),
    (0xf0909383, 0xf09093ab), (0xf0909384, 0xf09093ac), (0xf0909385, 0xf09093ad), (0xf0909386, 0xf09093ae),
    (0xf0909387, 0xf09093af), (0xf0909388, 0xf09093b0), (0xf0909389, 0xf09093b1), (0xf090938a, 0xf09093b2),
    (0xf090938b, 0xf09093b3), (0xf090938c, 0xf09093b4), (0xf090938d, 0xf09093b5), (0xf090938e, 0xf09093b6),
    (0xf090938f, 0xf09093b7), (0xf0909390, 0xf09093b8), (0xf0909391, 0xf09093b9), (0xf0909392, 0xf09093ba),
    (0xf0909393, 0xf09093bb), (0xf09095b0, 0xf0909697), (0xf09095b1, 0xf0909698), (0xf09095b2, 0xf0909699),
    (0xf09095b3, 0xf090969a), (0xf09095b4, 0xf090969b), (0xf09095b5, 0xf090969c), (0xf09095b6, 0xf090969d),
    (0xf09095b7, 0xf090969e), (0xf09095b8, 0xf090969f), (0xf09095b9, 0xf09096a0), (0xf09095ba, 0xf09096a1),
    (0xf09095bc, 0xf09096a3), (0xf09095bd, 0xf09096a4), (0xf09095be, 0xf09096a5), (0xf09095bf, 0xf09096a6),
    (0xf0909680, 0xf09096a7), (0xf0909681, 0xf09096a8), (0xf0909682, 0xf09096a9), (0xf0909683, 0xf09096aa),
    (0xf0909684, 0xf09096ab), (0xf0909685, 0xf09096ac), (0xf0909686, 0xf09096ad), (0xf0909687, 0xf09096ae),
    (0xf0909688, 0xf09096af), (0xf0909689, 0xf09096b0), (0xf090968a, 0xf09096b1), (0xf090968c, 0xf09096b3),
    (0xf090968d, 0xf09096b4), (0xf090968e, 0xf09096b5), (0xf090968f, 0xf09096b6), (0xf0909690, 0xf09096b7),
    (0xf0909691, 0xf09096b8), (0xf0909692, 0xf09096b9), (0xf0909694, 0xf09096bb), (0xf0909695, 0xf09096bc),
    (0xf090b280, 0xf090b380), (0xf090b281, 0xf090b381), (0xf090b282, 0xf090b382), (0xf090b283, 0xf090b383),
    (0xf090b284, 0xf090b384), (0xf090b285, 0xf090b385), (0xf090b286, 0xf090b386), (0xf090b287, 0xf090b387),
    (0xf090b288, 0xf090b388), (0xf090b289, 0xf090b389), (0xf090b28a, 0xf090b38a), (0xf090b28b, 0xf090b38b),
    (0xf090b28c, 0xf090b38c), (0xf090b28d, 0xf090b38d), (0xf090b28e, 0xf090b38e), (0xf090b28f, 0xf090b38f),
    (0xf090b290, 0xf090b390), (0xf090b291, 0xf090b391), (0xf090b292, 0xf090b392), (0xf090b293, 0xf090b393),
    (0xf090b294, 0xf090b394), (0xf090b295, 0xf090b395), (0xf090b296, 0xf090b396), (0xf090b297, 0xf090b397),
    (0xf090b298, 0xf090b398), (0xf090b299, 0xf090b399), (0xf090b29a, 0xf090b39a), (0xf090b29b, 0xf090b39b),
    (0xf090b29c, 0xf090b39c), (0xf090b29d, 0xf090b39d), (0xf090b29e, 0xf090b39e), (0xf090b29f, 0xf090b39f),
    (0xf090b2a0, 0xf090b3a0), (0xf090b2a1, 0xf090b3a1), (0xf090b2a2, 0xf090b3a2), (0xf090b2a3, 0xf090b3a3),
    (0xf090b2a4, 0xf090b3a4), (0xf090b2a5, 0xf090b3a5), (0xf090b2a6, 0xf090b3a6), (0xf090b2a7, 0xf090b3a7),
    (0xf090b2a8, 0xf090b3a8), (0xf090b2a9, 0xf090b3a9), (0xf090b2aa, 0xf090b3aa), (0xf090b2ab, 0xf090b3ab),
    (0xf090b2ac, 0xf090b3ac), (0xf090b2ad, 0xf090b3ad), (0xf090b2ae, 0xf090b3ae), (0xf090b2af, 0xf090b3af),
    (0xf090b2b0, 0xf090b3b0), (0xf090b2b1, 0xf090b3b1), (0xf090b2b2, 0xf090b3b2), (0xf091a2a0, 0xf091a380),
    (0xf091a2a1, 0xf091a381), (0xf091a2a2, 0xf091a382), (0xf091a2a3, 0xf091a383), (0xf091a2a4, 0xf091a384),
    (0xf091a2a5, 0xf091a385), (0xf091a2a6, 0xf091a386), (0xf091a2a7, 0xf091a387), (0xf091a2a8, 0xf091a388),
    (0xf091a2a9, 0xf091a389), (0xf091a2aa, 0xf091a38a), (0xf091a2ab, 0xf091a38b), (0xf091a2ac, 0xf091a38c),
    (0xf091a2ad, 0xf091a38d), (0xf091a2ae, 0xf091a38e), (0xf091a2af, 0xf091a38f), (0xf091a2b0, 0xf091a390),
    (0xf091a2b1, 0xf091a391), (0xf091a2b2, 0xf091a392), (0xf091a2b3, 0xf091a393), (0xf091a2b4, 0xf091a394),
    (0xf091a2b5, 0xf091a395), (0xf091a2b6, 0xf091a396), (0xf091a2b7, 0xf091a397), (0xf091a2b8, 0xf091a398),
    (0xf091a2b9, 0xf091a399), (0xf091a2ba, 0xf091a39a), (0xf091a2bb, 0xf091a39b), (0xf091a2bc, 0xf091a39c),
    (0xf091a2bd, 0xf091a39d), (0xf091a2be, 0xf091a39e), (0xf091a2bf, 0xf091a39f), (0xf096b980, 0xf096b9a0),
    (0xf096b981, 0xf096b9a1), (0xf096b982, 0xf096b9a2), (0xf096b983, 0xf096b9a3), (0xf096b984, 0xf096b9a4),
    (0xf096b985, 0xf096b9a5), (0xf096b986, 0xf096b9a6), (0xf096b987, 0xf096b9a7), (0xf096b988, 0xf096b9a8),
    (0xf096b989, 0xf096b9a9), (0xf096b98a, 0xf096b9aa), (0xf096b98b, 0xf096b9ab), (0xf096b98c, 0xf096b9ac),
    (0xf096b98d, 0xf096b9ad), (0xf096b98e, 0xf096b9ae), (0xf096b98f, 0xf096b9af), (0xf096b990, 0xf096b9b0),
    (0xf096b991, 0xf096b9b1), (0xf096b992, 0xf096b9b2), (0xf096b993, 0xf096b9b3), (0xf096b994, 0xf096b9b4),
    (0xf096b995, 0xf096b9b5), (0xf096b996, 0xf096b9b6), (0xf096b997, 0xf096b9b7), (0xf096b998, 0xf096b9b8),
    (0xf096b999, 0xf096b9b9), (0xf096b99a, 0xf096b9ba), (0xf096b99b, 0xf096b9bb), (0xf096b99c, 0xf096b9bc),
    (0xf096b99d, 0xf096b9bd), (0xf096b99e, 0xf096b9be), (0xf096b99f, 0xf096b9bf), (0xf09ea480, 0xf09ea4a2),
    (0xf09ea481, 0xf09ea4a3), (0xf09ea482, 0xf09ea4a4), (0xf09ea483, 0xf09ea4a5), (0xf09ea484, 0xf09ea4a6),
    (0xf09ea485, 0xf09ea4a7), (0xf09ea486, 0xf09ea4a8), (0xf09ea487, 0xf09ea4a9), (0xf09ea488, 0xf09ea4aa),
    (0xf09ea489, 0xf09ea4ab), (0xf09ea48a, 0xf09ea4ac), (0xf09ea48b, 0xf09ea4ad), (0xf09ea48c, 0xf09ea4ae),
    (0xf09ea48d, 0xf09ea4af), (0xf09ea48e, 0xf09ea4b0), (0xf09ea48f, 0xf09ea4b1), (0xf09ea490, 0xf09ea4b2),
    (0xf09ea491, 0xf09ea4b3), (0xf09ea492, 0xf09ea4b4), (0xf09ea493, 0xf09ea4b5), (0xf09ea494, 0xf09ea4b6),
    (0xf09ea495, 0xf09ea4b7), (0xf09ea496, 0xf09ea4b8), (0xf09ea497, 0xf09ea4b9), (0xf09ea498, 0xf09ea4ba),
    (0xf09ea499, 0xf09ea4bb), (0xf09ea49a, 0xf09ea4bc), (0xf09ea49b, 0xf09ea4bd), (0xf09ea49c, 0xf09ea4be),
    (0xf09ea49d, 0xf09ea4bf), (0xf09ea49e, 0xf09ea580), (0xf09ea49f, 0xf09ea581), (0xf09ea4a0, 0xf09ea582),
    (0xf09ea4a1, 0xf09ea583),
];
