//! Small embedded word list used when `data/words.txt` is absent. Enough to
//! keep the construction engine and tests functional without a real
//! dictionary on disk; not meant to be a complete lexicon.
pub const FALLBACK_WORDS: &[&str] = &[
    "a", "i", "an", "at", "as", "be", "by", "do", "go", "he", "if", "in", "is", "it", "me", "my",
    "no", "of", "on", "or", "so", "to", "up", "us", "we",
    "ace", "act", "add", "age", "ago", "aid", "aim", "air", "ale", "all", "and", "ant", "any",
    "ape", "arc", "are", "arm", "art", "ash", "ask", "ate", "awe", "axe",
    "bad", "bag", "ban", "bar", "bat", "bay", "bed", "bee", "beg", "bet", "bid", "big", "bit",
    "boa", "boat", "boy", "bug", "bun", "bus", "but", "buy", "cab", "can", "cap", "car", "cat",
    "cod", "cog", "cop", "cot", "cow", "cry", "cub", "cup", "cut", "dam", "day", "den", "dew",
    "did", "die", "dig", "dim", "dip", "dog", "don", "dot", "dry", "dub", "due", "dug", "ear",
    "eat", "ebb", "eel", "egg", "ego", "elf", "elm", "end", "era", "eve", "ewe", "eye", "fan",
    "far", "fat", "fed", "fee", "few", "fin", "fit", "fix", "fly", "fog", "for", "fox", "fun",
    "fur", "gap", "gas", "gel", "gem", "get", "gig", "gnu", "got", "gum", "gun", "gut", "guy",
    "gym", "had", "ham", "has", "hat", "hay", "hem", "hen", "her", "hew", "hey", "hid", "him",
    "hip", "his", "hit", "hog", "hop", "hot", "how", "hub", "hue", "hug", "hut", "ice", "icy",
    "ill", "ink", "inn", "ion", "ire", "irk", "its", "ivy", "jab", "jam", "jar", "jaw", "jay",
    "jet", "jig", "job", "jog", "jot", "joy", "jug", "jut", "keg", "key", "kid", "kin", "kit",
    "lab", "lad", "lag", "lap", "law", "lay", "led", "leg", "let", "lid", "lie", "lip", "lit",
    "log", "lot", "low", "mad", "man", "map", "mat", "may", "men", "met", "mix", "mob", "mod",
    "mom", "mop", "mud", "mug", "nap", "net", "new", "nil", "nip", "nod", "nor", "not", "now",
    "nut", "oak", "oar", "odd", "off", "oil", "old", "one", "opt", "orb", "ore", "our", "out",
    "owe", "owl", "own", "pad", "pan", "pat", "paw", "pay", "pea", "pen", "pet", "pie", "pig",
    "pin", "pit", "pod", "pop", "pot", "pry", "pub", "pup", "put", "rag", "ram", "ran", "rap",
    "rat", "raw", "ray", "red", "rib", "rid", "rig", "rim", "rip", "rob", "rod", "rot", "row",
    "rub", "rug", "run", "rut", "rye", "sad", "sap", "sat", "saw", "say", "sea", "see", "set",
    "sew", "she", "shy", "sin", "sip", "sir", "sit", "six", "ski", "sky", "sly", "sob", "sod",
    "son", "sow", "soy", "spa", "spy", "sty", "sub", "sue", "sun", "sup", "tab", "tag", "tan",
    "tap", "tar", "tax", "tea", "ten", "the", "thy", "tie", "tin", "tip", "toe", "ton", "too",
    "top", "tow", "toy", "try", "tub", "tug", "two", "use", "van", "vat", "vet", "vie", "vow",
    "wag", "war", "was", "wax", "way", "web", "wed", "wet", "who", "why", "wig", "win", "wit",
    "woe", "wok", "won", "wow", "yak", "yam", "yen", "yes", "yet", "you", "zap", "zed", "zoo",
    "able", "acid", "aged", "also", "area", "army", "away", "baby", "back", "ball", "band",
    "bank", "base", "bath", "bear", "beat", "been", "beer", "bell", "belt", "best", "bird",
    "blue", "boat", "body", "bold", "bond", "bone", "book", "born", "both", "bowl", "bulk",
    "burn", "bush", "busy", "cake", "call", "calm", "came", "camp", "card", "care", "case",
    "cash", "cast", "cave", "cell", "chat", "chip", "city", "club", "coal", "coat", "code",
    "cold", "come", "cook", "cool", "cope", "copy", "core", "cost", "crew", "crop", "dark",
    "data", "date", "dawn", "days", "dead", "deal", "dear", "debt", "deep", "deny", "desk",
    "dial", "dice", "diet", "dirt", "dish", "does", "done", "door", "dose", "down", "draw",
    "drop", "drug", "dual", "duke", "dust", "duty", "each", "earn", "ease", "east", "easy",
    "edge", "else", "even", "ever", "evil", "exam", "exit", "face", "fact", "fail", "fair",
    "fall", "farm", "fast", "fate", "fear", "feed", "feel", "feet", "fell", "felt", "file",
    "fill", "film", "find", "fine", "fire", "firm", "fish", "fist", "five", "flag", "flat",
    "flee", "flow", "food", "foot", "ford", "form", "fort", "four", "free", "from", "fuel",
    "full", "fund", "gain", "game", "gate", "gave", "gear", "gene", "gift", "girl", "give",
    "glad", "goal", "goes", "gold", "golf", "gone", "good", "gray", "grew", "grey", "grid",
    "grow", "gulf", "hair", "half", "hall", "hand", "hang", "hard", "harm", "hate", "have",
    "head", "hear", "heat", "held", "hell", "help", "herb", "here", "hero", "hide", "high",
    "hill", "hire", "hold", "hole", "holy", "home", "hope", "horn", "host", "hour", "huge",
    "hunt", "hurt", "idea", "inch", "into", "iron", "item", "jail", "join", "joke", "jump",
    "jury", "just", "keen", "keep", "kept", "kick", "kind", "king", "knee", "knew", "know",
    "lack", "lady", "lake", "land", "lane", "last", "late", "lead", "leaf", "lean", "left",
    "lend", "lens", "less", "life", "lift", "like", "line", "link", "list", "live", "load",
    "loan", "lock", "logo", "long", "look", "lord", "lose", "loss", "lost", "loud", "love",
    "luck", "made", "mail", "main", "make", "male", "many", "mark", "mask", "mass", "mate",
    "meal", "mean", "meat", "meet", "menu", "mere", "mild", "mile", "milk", "mind", "mine",
    "miss", "mode", "mood", "moon", "more", "most", "move", "much", "mule", "must", "myth",
    "name", "navy", "near", "neat", "neck", "need", "news", "next", "nice", "nine", "none",
    "nose", "note", "okay", "once", "only", "onto", "open", "oral", "over", "pace", "pack",
    "page", "paid", "pain", "pair", "palm", "park", "part", "pass", "past", "path", "peak",
    "pick", "pile", "pink", "pipe", "plan", "play", "plot", "plug", "plus", "poem", "poet",
    "pole", "poll", "pond", "pool", "poor", "port", "pose", "post", "pull", "pure", "push",
    "race", "rack", "rail", "rain", "rank", "rare", "rate", "read", "real", "rear", "rely",
    "rent", "rest", "rice", "rich", "ride", "ring", "rise", "risk", "road", "rock", "role",
    "roll", "roof", "room", "root", "rope", "rose", "rule", "rush", "rust", "safe", "said",
    "sake", "sale", "salt", "same", "sand", "save", "seat", "seed", "seek", "seem", "seen",
    "self", "sell", "send", "sent", "ship", "shop", "shot", "show", "shut", "sick", "side",
    "sign", "sing", "sink", "site", "size", "skin", "slip", "slow", "snap", "snow", "sock",
    "soft", "soil", "sold", "sole", "some", "song", "soon", "sort", "soul", "soup", "spin",
    "spot", "star", "stay", "step", "stop", "such", "suit", "sure", "swim", "tain", "take",
    "tale", "talk", "tall", "tank", "tape", "task", "team", "tear", "tell", "tend", "tent",
    "term", "test", "text", "than", "that", "them", "then", "they", "thin", "this", "thus",
    "tide", "tile", "time", "tiny", "tire", "told", "toll", "tone", "tons", "tool", "torn",
    "tour", "town", "tree", "trim", "trip", "true", "tube", "tune", "turn", "twin", "type",
    "unit", "upon", "used", "user", "vast", "very", "view", "vote", "wage", "wait", "wake",
    "walk", "wall", "want", "ward", "warm", "warn", "wash", "wave", "ways", "weak", "wear",
    "week", "well", "went", "were", "west", "what", "when", "whom", "wide", "wife", "wild",
    "will", "wind", "wine", "wing", "wire", "wise", "wish", "with", "wolf", "wood", "wool",
    "word", "wore", "work", "worn", "wrap", "yard", "yarn", "year", "your", "zero", "zone",
];
