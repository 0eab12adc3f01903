use super::{
    CannedActivity, CannedAttraction, CannedFlight, CannedHotel, CannedRestaurant, CityData,
    FocusSummaries, Tiered,
};

pub static PARIS: CityData = CityData {
    name: "Paris",
    day_title_verb: "Discovering",
    summaries: FocusSummaries {
        general: "journey through Paris's iconic landmarks, world-class museums, and exquisite cuisine.",
        food: "culinary adventure through Paris's best restaurants, bakeries, and markets.",
        culture: "exploration of Paris's rich cultural heritage, world-famous museums, and historical sites.",
        architecture: "journey through Paris's stunning architectural masterpieces, from Gothic cathedrals to modern design.",
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
        title: "Eiffel Tower",
        activity_type: "Sightseeing",
        description: "Visit the iconic symbol of Paris and enjoy panoramic views of the city.",
        location: "Champ de Mars, 5 Avenue Anatole France, Paris",
        duration: "2 hours",
    },
    CannedActivity {
        title: "Louvre Museum",
        activity_type: "Museum",
        description: "Explore one of the world's largest art museums, home to the Mona Lisa and thousands of other masterpieces.",
        location: "Rue de Rivoli, Paris",
        duration: "3 hours",
    },
    CannedActivity {
        title: "Notre-Dame Cathedral",
        activity_type: "Sightseeing",
        description: "Admire the exterior of this Gothic masterpiece (interior closed for renovation after the 2019 fire).",
        location: "Parvis Notre-Dame - Pl. Jean-Paul II, Paris",
        duration: "1 hour",
    },
    CannedActivity {
        title: "Montmartre",
        activity_type: "Sightseeing",
        description: "Explore this charming historic district known for its artistic history and the beautiful Sacré-Cœur Basilica.",
        location: "Montmartre, Paris",
        duration: "2 hours",
    },
    CannedActivity {
        title: "Champs-Élysées",
        activity_type: "Sightseeing",
        description: "Stroll down one of the world's most famous avenues, lined with shops, cafés, and theaters.",
        location: "Champs-Élysées, Paris",
        duration: "1.5 hours",
    },
    CannedActivity {
        title: "Musée d'Orsay",
        activity_type: "Museum",
        description: "Visit this museum housed in a former railway station, featuring a remarkable collection of Impressionist art.",
        location: "1 Rue de la Légion d'Honneur, Paris",
        duration: "2 hours",
    },
    CannedActivity {
        title: "Luxembourg Gardens",
        activity_type: "Park",
        description: "Relax in these beautiful gardens surrounding the Luxembourg Palace, the seat of the French Senate.",
        location: "Rue de Médicis, Paris",
        duration: "1 hour",
    },
    CannedActivity {
        title: "Seine River Cruise",
        activity_type: "Sightseeing",
        description: "See Paris from a different perspective on a leisurely boat cruise along the Seine River.",
        location: "Pont de l'Alma, Paris",
        duration: "1 hour",
    },
    CannedActivity {
        title: "Arc de Triomphe",
        activity_type: "Sightseeing",
        description: "Visit this iconic monument honoring those who fought for France, with spectacular views from the top.",
        location: "Place Charles de Gaulle, Paris",
        duration: "1 hour",
    },
    CannedActivity {
        title: "Centre Pompidou",
        activity_type: "Museum",
        description: "Explore this inside-out building housing Europe's largest collection of modern and contemporary art.",
        location: "Place Georges-Pompidou, Paris",
        duration: "2 hours",
    },
];

static BREAKFASTS: [CannedActivity; 2] = [
    CannedActivity {
        title: "Breakfast at Café de Flore",
        activity_type: "Breakfast",
        description: "Start your day at this iconic Parisian café with coffee and pastries.",
        location: "172 Boulevard Saint-Germain, Paris",
        duration: "45 minutes",
    },
    CannedActivity {
        title: "Breakfast at Du Pain et des Idées",
        activity_type: "Breakfast",
        description: "Enjoy some of the best pastries in Paris at this famous bakery.",
        location: "34 Rue Yves Toudic, Paris",
        duration: "45 minutes",
    },
];

static LUNCHES: [CannedActivity; 3] = [
    CannedActivity {
        title: "Lunch at Bouillon Chartier",
        activity_type: "Lunch",
        description: "Experience traditional French cuisine at this historic restaurant with affordable prices.",
        location: "7 Rue du Faubourg Montmartre, Paris",
        duration: "1 hour",
    },
    CannedActivity {
        title: "Lunch at Le Comptoir du Relais",
        activity_type: "Lunch",
        description: "Enjoy creative French bistro cuisine in the heart of Saint-Germain-des-Prés.",
        location: "9 Carrefour de l'Odéon, Paris",
        duration: "1 hour",
    },
    CannedActivity {
        title: "Lunch at Marché des Enfants Rouges",
        activity_type: "Lunch",
        description: "Sample diverse cuisines at Paris's oldest covered market.",
        location: "39 Rue de Bretagne, Paris",
        duration: "1.5 hours",
    },
];

static DINNERS: [CannedActivity; 3] = [
    CannedActivity {
        title: "Dinner at Le Jules Verne",
        activity_type: "Dinner",
        description: "Experience fine dining with a view at this restaurant located on the Eiffel Tower.",
        location: "Eiffel Tower, Avenue Gustave Eiffel, Paris",
        duration: "2 hours",
    },
    CannedActivity {
        title: "Dinner at Bistrot Paul Bert",
        activity_type: "Dinner",
        description: "Enjoy classic French bistro fare at this beloved local institution.",
        location: "18 Rue Paul Bert, Paris",
        duration: "2 hours",
    },
    CannedActivity {
        title: "Wine and Cheese Tasting",
        activity_type: "Dinner",
        description: "Sample various French wines and cheeses at a cozy wine bar.",
        location: "Le Marais, Paris",
        duration: "2 hours",
    },
];

static FLIGHTS: [CannedFlight; 3] = [
    CannedFlight {
        airline: "Air France",
        departure_time: "9:15 AM",
        arrival_time: "11:30 AM",
        duration: "2h 15m",
        stops: 0,
        price: Tiered {
            luxury: "$550",
            moderate: "$420",
            budget: "$320",
        },
    },
    CannedFlight {
        airline: "British Airways",
        departure_time: "1:30 PM",
        arrival_time: "3:50 PM",
        duration: "2h 20m",
        stops: 0,
        price: Tiered {
            luxury: "$580",
            moderate: "$440",
            budget: "$350",
        },
    },
    CannedFlight {
        airline: "EasyJet",
        departure_time: "6:45 AM",
        arrival_time: "9:05 AM",
        duration: "2h 20m",
        stops: 0,
        price: Tiered {
            luxury: "$380",
            moderate: "$250",
            budget: "$180",
        },
    },
];

static HOTELS: [CannedHotel; 3] = [
    CannedHotel {
        name: Tiered {
            luxury: "Ritz Paris",
            moderate: "Hôtel Le Relais Montmartre",
            budget: "Generator Paris",
        },
        location: Tiered {
            luxury: "Place Vendôme",
            moderate: "Montmartre",
            budget: "Canal Saint-Martin",
        },
        price: Tiered {
            luxury: "$950",
            moderate: "$220",
            budget: "$80",
        },
        rating: Tiered {
            luxury: 4.9,
            moderate: 4.5,
            budget: 4.3,
        },
        image: "https://images.pexels.com/photos/258154/pexels-photo-258154.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    },
    CannedHotel {
        name: Tiered {
            luxury: "Four Seasons Hotel George V",
            moderate: "Hôtel Fabric",
            budget: "Hôtel Paradis",
        },
        location: Tiered {
            luxury: "Champs-Élysées",
            moderate: "Oberkampf",
            budget: "10th Arrondissement",
        },
        price: Tiered {
            luxury: "$1,200",
            moderate: "$240",
            budget: "$110",
        },
        rating: Tiered {
            luxury: 4.9,
            moderate: 4.6,
            budget: 4.2,
        },
        image: "https://images.pexels.com/photos/262048/pexels-photo-262048.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    },
    CannedHotel {
        name: Tiered {
            luxury: "Hôtel Plaza Athénée",
            moderate: "Le Pavillon de la Reine",
            budget: "The Loft Boutique Hostel",
        },
        location: Tiered {
            luxury: "Avenue Montaigne",
            moderate: "Le Marais",
            budget: "Belleville",
        },
        price: Tiered {
            luxury: "$1,100",
            moderate: "$280",
            budget: "$70",
        },
        rating: Tiered {
            luxury: 4.8,
            moderate: 4.7,
            budget: 4.1,
        },
        image: "https://images.pexels.com/photos/1579253/pexels-photo-1579253.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    },
];

static RESTAURANTS: [CannedRestaurant; 5] = [
    CannedRestaurant {
        name: "Le Jules Verne",
        cuisine: "Contemporary French",
        location: "Eiffel Tower",
        price_range: Tiered::flat("€€€€"),
        rating: 4.7,
        image: "https://images.pexels.com/photos/67468/pexels-photo-67468.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    },
    CannedRestaurant {
        name: "Bouillon Chartier",
        cuisine: "Traditional French",
        location: "9th Arrondissement",
        price_range: Tiered::flat("€€"),
        rating: 4.3,
        image: "https://images.pexels.com/photos/1579739/pexels-photo-1579739.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    },
    CannedRestaurant {
        name: "L'As du Fallafel",
        cuisine: "Middle Eastern",
        location: "Le Marais",
        price_range: Tiered::flat("€"),
        rating: 4.6,
        image: "https://images.pexels.com/photos/1108117/pexels-photo-1108117.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    },
    CannedRestaurant {
        name: "Septime",
        cuisine: "Modern French",
        location: "11th Arrondissement",
        price_range: Tiered::flat("€€€"),
        rating: 4.8,
        image: "https://images.pexels.com/photos/260922/pexels-photo-260922.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    },
    CannedRestaurant {
        name: "Breizh Café",
        cuisine: "Breton (Crêpes)",
        location: "Le Marais",
        price_range: Tiered::flat("€€"),
        rating: 4.5,
        image: "https://images.pexels.com/photos/4259707/pexels-photo-4259707.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    },
];

static ATTRACTIONS: [CannedAttraction; 6] = [
    CannedAttraction {
        name: "Eiffel Tower",
        category: "Landmark",
        location: "7th Arrondissement",
        duration: "2 hours",
        price: "€26",
        image: "https://images.pexels.com/photos/699466/pexels-photo-699466.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    },
    CannedAttraction {
        name: "Louvre Museum",
        category: "Art Museum",
        location: "1st Arrondissement",
        duration: "3 hours",
        price: "€17",
        image: "https://images.pexels.com/photos/2363/france-landmark-lights-night.jpg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    },
    CannedAttraction {
        name: "Musée d'Orsay",
        category: "Art Museum",
        location: "7th Arrondissement",
        duration: "2 hours",
        price: "€14",
        image: "https://images.pexels.com/photos/2675268/pexels-photo-2675268.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    },
    CannedAttraction {
        name: "Montmartre & Sacré-Cœur",
        category: "District, Church",
        location: "18th Arrondissement",
        duration: "2 hours",
        price: "Free",
        image: "https://images.pexels.com/photos/705764/pexels-photo-705764.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    },
    CannedAttraction {
        name: "Seine River Cruise",
        category: "Boat Tour",
        location: "Various departure points",
        duration: "1 hour",
        price: "€15",
        image: "https://images.pexels.com/photos/981682/pexels-photo-981682.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    },
    CannedAttraction {
        name: "Palace of Versailles",
        category: "Historic Palace",
        location: "Versailles (day trip)",
        duration: "5 hours",
        price: "€20",
        image: "https://images.pexels.com/photos/1483778/pexels-photo-1483778.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    },
];
