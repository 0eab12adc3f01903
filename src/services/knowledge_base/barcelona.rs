use super::{
    CannedActivity, CannedAttraction, CannedFlight, CannedHotel, CannedRestaurant, CityData,
    FocusSummaries, Tiered,
};

pub static BARCELONA: CityData = CityData {
    name: "Barcelona",
    day_title_verb: "Exploring",
    summaries: FocusSummaries {
        general: "journey through Barcelona's iconic architecture, vibrant culture, and delicious cuisine.",
        food: "culinary adventure through Barcelona's best restaurants, tapas bars, and food markets.",
        culture: "exploration of Barcelona's rich cultural heritage, museums, and historical sites.",
        architecture: "journey through Barcelona's stunning architectural masterpieces, from Gaudí to modern design.",
    },
    activities: &ACTIVITIES,
    breakfasts: &BREAKFASTS,
    lunches: &LUNCHES,
    dinners: &DINNERS,
    flights: &FLIGHTS,
    hotels: &HOTELS,
    restaurants: &RESTAURANTS,
    attractions: &ATTRACTIONS,
};

static ACTIVITIES: [CannedActivity; 10] = [
    CannedActivity {
        title: "La Sagrada Familia",
        activity_type: "Sightseeing",
        description: "Visit Antoni Gaudí's masterpiece, the iconic Sagrada Familia basilica.",
        location: "Carrer de Mallorca, 401, Barcelona",
        duration: "2 hours",
    },
    CannedActivity {
        title: "Park Güell",
        activity_type: "Sightseeing",
        description: "Explore the colorful Park Güell, another Gaudí masterpiece with amazing views of the city.",
        location: "Carrer d'Olot, Barcelona",
        duration: "1.5 hours",
    },
    CannedActivity {
        title: "La Rambla",
        activity_type: "Sightseeing",
        description: "Stroll down Barcelona's famous pedestrian street filled with shops, cafes, and street performers.",
        location: "La Rambla, Barcelona",
        duration: "1 hour",
    },
    CannedActivity {
        title: "Mercat de la Boqueria",
        activity_type: "Market",
        description: "Explore Barcelona's most famous food market with local produce, meats, cheeses, and more.",
        location: "La Rambla, 91, Barcelona",
        duration: "1 hour",
    },
    CannedActivity {
        title: "Barri Gòtic",
        activity_type: "Sightseeing",
        description: "Wander through the narrow medieval streets of Barcelona's Gothic Quarter.",
        location: "Gothic Quarter, Barcelona",
        duration: "2 hours",
    },
    CannedActivity {
        title: "Picasso Museum",
        activity_type: "Museum",
        description: "Visit the museum dedicated to one of the greatest artists of the 20th century.",
        location: "Carrer Montcada, 15-23, Barcelona",
        duration: "1.5 hours",
    },
    CannedActivity {
        title: "Casa Batlló",
        activity_type: "Sightseeing",
        description: "Explore another of Gaudí's masterpieces, the fantastic Casa Batlló.",
        location: "Passeig de Gràcia, 43, Barcelona",
        duration: "1 hour",
    },
    CannedActivity {
        title: "Barceloneta Beach",
        activity_type: "Beach",
        description: "Relax at Barcelona's most popular beach and enjoy the Mediterranean Sea.",
        location: "Barceloneta Beach, Barcelona",
        duration: "3 hours",
    },
    CannedActivity {
        title: "Camp Nou",
        activity_type: "Sightseeing",
        description: "Tour the famous home stadium of FC Barcelona.",
        location: "C. d'Arístides Maillol, 12, Barcelona",
        duration: "2 hours",
    },
    CannedActivity {
        title: "Montjuïc",
        activity_type: "Sightseeing",
        description: "Visit the mountain overlooking the harbor with gardens, museums, and great views.",
        location: "Montjuïc, Barcelona",
        duration: "3 hours",
    },
];

static BREAKFASTS: [CannedActivity; 2] = [
    CannedActivity {
        title: "Breakfast at Hoffman Bakery",
        activity_type: "Breakfast",
        description: "Start your day with pastries and coffee at this famous bakery.",
        location: "Carrer dels Flassaders, 44, Barcelona",
        duration: "45 minutes",
    },
    CannedActivity {
        title: "Breakfast at Granja La Pallaresa",
        activity_type: "Breakfast",
        description: "Enjoy traditional churros with hot chocolate at this historic café.",
        location: "Carrer de Petritxol, 11, Barcelona",
        duration: "45 minutes",
    },
];

static LUNCHES: [CannedActivity; 3] = [
    CannedActivity {
        title: "Lunch at El Quim de la Boqueria",
        activity_type: "Lunch",
        description: "Enjoy fresh seafood at this famous stall in La Boqueria market.",
        location: "La Boqueria Market, Barcelona",
        duration: "1 hour",
    },
    CannedActivity {
        title: "Lunch at Bar del Pla",
        activity_type: "Lunch",
        description: "Traditional Catalan tapas in a cozy atmosphere.",
        location: "Carrer Montcada, 2, Barcelona",
        duration: "1 hour",
    },
    CannedActivity {
        title: "Lunch at Can Culleretes",
        activity_type: "Lunch",
        description: "Dine at one of the oldest restaurants in Barcelona, serving Catalan cuisine since 1786.",
        location: "Carrer d'en Quintana, 5, Barcelona",
        duration: "1.5 hours",
    },
];

static DINNERS: [CannedActivity; 3] = [
    CannedActivity {
        title: "Dinner at Tickets",
        activity_type: "Dinner",
        description: "Experience avant-garde tapas at this world-renowned restaurant by Albert Adrià.",
        location: "Av. del Paraŀlel, 164, Barcelona",
        duration: "2 hours",
    },
    CannedActivity {
        title: "Dinner at 7 Portes",
        activity_type: "Dinner",
        description: "Enjoy traditional paella at this classic Barcelona restaurant.",
        location: "Passeig Isabel II, 14, Barcelona",
        duration: "2 hours",
    },
    CannedActivity {
        title: "Tapas Tour in El Born",
        activity_type: "Dinner",
        description: "Hop between tapas bars in the trendy El Born district, sampling local specialties.",
        location: "El Born, Barcelona",
        duration: "3 hours",
    },
];

static FLIGHTS: [CannedFlight; 3] = [
    CannedFlight {
        airline: "Vueling Airlines",
        departure_time: "10:25 AM",
        arrival_time: "12:40 PM",
        duration: "2h 15m",
        stops: 0,
        price: Tiered {
            luxury: "$450",
            moderate: "$320",
            budget: "$240",
        },
    },
    CannedFlight {
        airline: "Iberia",
        departure_time: "2:15 PM",
        arrival_time: "4:35 PM",
        duration: "2h 20m",
        stops: 0,
        price: Tiered {
            luxury: "$520",
            moderate: "$380",
            budget: "$290",
        },
    },
    CannedFlight {
        airline: "Ryanair",
        departure_time: "7:05 AM",
        arrival_time: "9:30 AM",
        duration: "2h 25m",
        stops: 0,
        price: Tiered {
            luxury: "$350",
            moderate: "$220",
            budget: "$150",
        },
    },
];

static HOTELS: [CannedHotel; 3] = [
    CannedHotel {
        name: Tiered {
            luxury: "Hotel Arts Barcelona",
            moderate: "H10 Madison",
            budget: "Hotel Market",
        },
        location: Tiered {
            luxury: "Marina Coastal Area",
            moderate: "Gothic Quarter",
            budget: "Sant Antoni",
        },
        price: Tiered {
            luxury: "$450",
            moderate: "$180",
            budget: "$95",
        },
        rating: Tiered {
            luxury: 4.8,
            moderate: 4.5,
            budget: 4.2,
        },
        image: "https://images.pexels.com/photos/2034335/pexels-photo-2034335.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    },
    CannedHotel {
        name: Tiered {
            luxury: "Mandarin Oriental Barcelona",
            moderate: "Hotel 1898",
            budget: "Hostal Grau",
        },
        location: Tiered {
            luxury: "Passeig de Gràcia",
            moderate: "La Rambla",
            budget: "El Raval",
        },
        price: Tiered {
            luxury: "$520",
            moderate: "$210",
            budget: "$85",
        },
        rating: Tiered {
            luxury: 4.9,
            moderate: 4.6,
            budget: 4.1,
        },
        image: "https://images.pexels.com/photos/164595/pexels-photo-164595.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    },
    CannedHotel {
        name: Tiered {
            luxury: "Cotton House Hotel",
            moderate: "Kimpton Vividora Hotel",
            budget: "Casa Camper",
        },
        location: Tiered {
            luxury: "Eixample",
            moderate: "Gothic Quarter",
            budget: "Raval",
        },
        price: Tiered {
            luxury: "$480",
            moderate: "$195",
            budget: "$110",
        },
        rating: Tiered {
            luxury: 4.7,
            moderate: 4.4,
            budget: 4.3,
        },
        image: "https://images.pexels.com/photos/271624/pexels-photo-271624.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    },
];

static RESTAURANTS: [CannedRestaurant; 5] = [
    CannedRestaurant {
        name: "Disfrutar",
        cuisine: "Contemporary Catalan",
        location: "Eixample",
        price_range: Tiered {
            luxury: "€€€€",
            moderate: "€€€",
            budget: "€€€",
        },
        rating: 4.9,
        image: "https://images.pexels.com/photos/941861/pexels-photo-941861.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    },
    CannedRestaurant {
        name: "El Quim de la Boqueria",
        cuisine: "Spanish, Seafood",
        location: "La Boqueria Market",
        price_range: Tiered::flat("€€"),
        rating: 4.7,
        image: "https://images.pexels.com/photos/1267320/pexels-photo-1267320.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    },
    CannedRestaurant {
        name: "Can Culleretes",
        cuisine: "Traditional Catalan",
        location: "Gothic Quarter",
        price_range: Tiered::flat("€€"),
        rating: 4.5,
        image: "https://images.pexels.com/photos/262978/pexels-photo-262978.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    },
    CannedRestaurant {
        name: "Tickets",
        cuisine: "Creative Tapas",
        location: "Poble Sec",
        price_range: Tiered::flat("€€€€"),
        rating: 4.8,
        image: "https://images.pexels.com/photos/370984/pexels-photo-370984.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    },
    CannedRestaurant {
        name: "La Paradeta",
        cuisine: "Seafood",
        location: "Born",
        price_range: Tiered::flat("€€"),
        rating: 4.6,
        image: "https://images.pexels.com/photos/8969237/pexels-photo-8969237.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    },
];

static ATTRACTIONS: [CannedAttraction; 6] = [
    CannedAttraction {
        name: "Sagrada Familia",
        category: "Architecture",
        location: "Eixample",
        duration: "2 hours",
        price: "€26",
        image: "https://images.pexels.com/photos/819764/pexels-photo-819764.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    },
    CannedAttraction {
        name: "Park Güell",
        category: "Architecture, Park",
        location: "Gràcia",
        duration: "1.5 hours",
        price: "€10",
        image: "https://images.pexels.com/photos/3254459/pexels-photo-3254459.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    },
    CannedAttraction {
        name: "Picasso Museum",
        category: "Art, Museum",
        location: "Born",
        duration: "1.5 hours",
        price: "€12",
        image: "https://images.pexels.com/photos/20967/pexels-photo.jpg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    },
    CannedAttraction {
        name: "Barceloneta Beach",
        category: "Beach",
        location: "Barceloneta",
        duration: "3 hours",
        price: "Free",
        image: "https://images.pexels.com/photos/7078264/pexels-photo-7078264.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    },
    CannedAttraction {
        name: "Camp Nou",
        category: "Sports",
        location: "Les Corts",
        duration: "2 hours",
        price: "€28",
        image: "https://images.pexels.com/photos/12858016/pexels-photo-12858016.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    },
    CannedAttraction {
        name: "Gothic Quarter",
        category: "Historical, Sightseeing",
        location: "Ciutat Vella",
        duration: "2 hours",
        price: "Free",
        image: "https://images.pexels.com/photos/4917073/pexels-photo-4917073.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    },
];
