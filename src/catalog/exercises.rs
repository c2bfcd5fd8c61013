//! Exercise names and coaching cues, grouped by category.
//!
//! Order within each table is the order exercises are offered for selection.

/// ROM Exercises.
pub(super) const ROM_EXERCISES: &[(&str, &str)] = &[
    (
        "Heel Slides",
        "Lie on your back with legs straight. Slowly slide your heel toward your buttocks, bending your knee as much as comfortable. Hold 3-5 seconds, then slide back.",
    ),
    (
        "Wall Slides",
        "Sit with your back against a wall, affected leg straight. Slowly slide down the wall, bending the knee. Hold, then slide back up.",
    ),
    (
        "Prone Hangs",
        "Lie face down with legs extended off the edge of a bed/table. Let gravity gently pull your knee into extension. Great for regaining terminal extension.",
    ),
    (
        "Heel Props",
        "Place a rolled towel under your heel with leg extended. Relax and let gravity push the knee down. Excellent passive extension exercise.",
    ),
    (
        "Stationary Bike",
        "Use minimal resistance initially. Focus on increasing range of motion rather than resistance. Great for improving flexion.",
    ),
    (
        "Seated Knee Extensions",
        "Sit with knees bent, slowly extend one knee until leg is straight. Hold briefly, then lower. Start without weights.",
    ),
    (
        "Patella Mobilizations",
        "Gently move kneecap in all directions with fingers. Helps prevent scar tissue adhesions around the patella.",
    ),
    (
        "Band-Assisted Knee Flexion",
        "Loop a band around ankle and pull to assist knee bending. Helps regain flexion with support.",
    ),
    (
        "Band-Assisted Terminal Knee Extension",
        "Anchor band behind knee, loop around foot. The band helps achieve full extension.",
    ),
    (
        "Supine Active Knee Extension",
        "Lie on back, hip at 90°. Extend knee as far as possible while maintaining hip position.",
    ),
    (
        "Seated Active Knee Flexion",
        "Sit with leg extended, actively bend knee as far as possible. Helps regain active flexion.",
    ),
    (
        "Wall Knee Flexion",
        "Stand facing wall, bend knee to bring foot up behind you. Wall provides balance support.",
    ),
    (
        "Standing Hamstring Stretch",
        "Place heel on low surface, lean forward at hips keeping back straight. Feel stretch in hamstring.",
    ),
    (
        "Quad Stretch",
        "Stand on one leg, pull other foot toward buttocks. Feel stretch in front of thigh.",
    ),
];

/// Strength Exercises.
pub(super) const STRENGTH_EXERCISES: &[(&str, &str)] = &[
    (
        "Straight Leg Raises",
        "Lie on your back with one leg bent and the other straight. Raise the straight leg to the height of the opposite knee. Great for early quad activation.",
    ),
    (
        "Quad Sets",
        "Sit with leg extended, tighten quad muscle to push back of knee down. Hold 5 seconds. Fundamental for reactivating quad control.",
    ),
    (
        "Hamstring Curls",
        "Lie face down, bend knee to bring heel toward buttocks. Start without weights, progress as tolerated.",
    ),
    (
        "Glute Bridges",
        "Lie on back, feet flat. Lift hips toward ceiling by squeezing glutes. Essential for posterior chain strengthening.",
    ),
    (
        "Wall Squats",
        "Stand with back against wall, slide down until knees are at 45-60°. Hold position. Great controlled squat progression.",
    ),
    (
        "Step-Ups",
        "Step up onto a platform leading with affected leg. Start with low step, progress height as tolerated.",
    ),
    (
        "Leg Press",
        "Use machine with light weight initially. Focus on controlled movement through comfortable range.",
    ),
    (
        "Lunges",
        "Step forward into lunge position. Ensure knee tracks over toes. Start with partial range, progress to full.",
    ),
    (
        "Romanian Deadlifts",
        "Hold weights, hinge at hips keeping back straight. Excellent for hamstring and posterior chain strength.",
    ),
    (
        "Calf Raises",
        "Rise onto toes, lower slowly. Can be done double or single leg. Essential for push-off strength.",
    ),
    (
        "Terminal Knee Extensions",
        "Stand with resistance band around back of knee. Extend knee against resistance. Critical for quad control.",
    ),
    (
        "Reverse Lunges",
        "Step backward into lunge position. Often better tolerated than forward lunges early in rehab.",
    ),
    (
        "Bulgarian Split Squats",
        "Stand in lunge position with rear foot elevated. Lower into lunge. Excellent single-leg stability exercise with reduced knee load compared to regular lunges.",
    ),
    (
        "Pistol Squat Progression",
        "Single leg squat progression. Start with partial range using support, progress to deeper range.",
    ),
    (
        "Good Mornings",
        "Hinge at hips with slight knee bend. Targets hamstrings and low back. Start without weights.",
    ),
    (
        "Hip Adduction",
        "Move leg inward against resistance. Works inner thigh muscles important for knee stability.",
    ),
    (
        "Hip Abduction",
        "Move leg outward against resistance. Critical for hip stability which supports knee function.",
    ),
    (
        "Hip Thrusts",
        "Similar to glute bridge but shoulders elevated on bench. Advanced glute strengthening.",
    ),
    (
        "Nordic Hamstring Curls",
        "Kneel with ankles anchored, hands ready to catch yourself. Slowly lower your torso toward the floor, resisting with your hamstrings. Advanced exercise for hamstring strength.",
    ),
    (
        "Lateral Step-Downs",
        "Stand on step, lower other foot toward floor with controlled knee bend. Excellent for knee stability and control.",
    ),
    (
        "Single-Leg Calf Raises",
        "Rise onto toes of one foot, lower slowly. Advanced progression for calf strength.",
    ),
    (
        "Walking Lunges",
        "Continuous lunges while walking forward. More dynamic progression of static lunges.",
    ),
];

/// Resistance Band Exercises.
pub(super) const BAND_EXERCISES: &[(&str, &str)] = &[
    (
        "Band Terminal Knee Extensions",
        "Sit with a band around the ankle, anchored behind you. Start with knee bent, then extend fully against resistance. Crucial for quad control.",
    ),
    (
        "Band Hip Abduction",
        "Stand with a band around ankles/thighs. Move leg sideways against resistance. Strengthens hip stabilizers important for knee control.",
    ),
    (
        "Band Hip Adduction",
        "Stand with one end of band anchored, loop around the inside of ankle. Pull leg inward against resistance. Works inner thigh muscles.",
    ),
    (
        "Band Lateral Walks",
        "Place band around ankles/thighs. Take sidesteps while maintaining tension. Great for hip stabilizers and preventing knee valgus.",
    ),
    (
        "Band Monster Walks",
        "Place band around ankles/thighs. Walk forward with small steps, maintaining outward tension. Activates glutes and teaches proper knee alignment.",
    ),
    (
        "Band Hamstring Curls",
        "Anchor band in front, loop around ankle. Bend knee against resistance to work hamstrings. Crucial for ACL protection.",
    ),
    (
        "Band Glute Bridges",
        "Lie on back with band above knees. Perform bridge by lifting hips. Band adds resistance to glutes, essential for knee stability.",
    ),
    (
        "Band Standing Leg Press",
        "Anchor band under foot, hold other end in hands. Press leg back against resistance. Modified leg press for early strength building.",
    ),
    (
        "Band Hip Extensions",
        "Anchor band in front, loop around ankle. Extend leg behind you against resistance. Targets glutes and hamstrings.",
    ),
    (
        "Band Squats",
        "Stand on band with feet shoulder-width, hold ends at shoulders. Squat against resistance. Adds variable resistance to the squat pattern.",
    ),
    (
        "Band Seated Row",
        "Sit with legs extended, band around feet. Pull band toward torso. Improves upper body posture which affects lower body mechanics.",
    ),
    (
        "Band Clamshells",
        "Lie on side with band around knees, open knees while keeping feet together. Excellent for gluteus medius activation.",
    ),
    (
        "Band Pull-Aparts",
        "Hold band in both hands at chest height. Pull apart, keeping arms straight. Strengthens upper back which improves overall posture during leg exercises.",
    ),
    (
        "Band Deadlifts",
        "Stand on middle of band, holding ends. Perform deadlift motion against resistance. Total-body exercise that teaches proper hip-hinge mechanics.",
    ),
    (
        "Band Standing Leg Abduction",
        "Anchor band at ankle level, loop around ankle. Abduct leg against resistance while standing. More functional position than lying.",
    ),
    (
        "Band Lateral Raises",
        "Stand on band, raise arms out to sides. Upper body strength to complement lower body rehabilitation.",
    ),
];

/// Balance & Neuromuscular.
pub(super) const BALANCE_EXERCISES: &[(&str, &str)] = &[
    (
        "Single-Leg Balance",
        "Stand on affected leg, maintain balance. Progress by closing eyes or standing on unstable surface. Fundamental exercise for proprioception.",
    ),
    (
        "Mini-Trampoline",
        "Gentle bouncing on trampoline. Good for proprioception and low-impact loading of knee.",
    ),
    (
        "Wobble Board",
        "Stand on wobble board, maintain balance. Progress from double-leg to single-leg stance. Excellent for ankle and knee proprioception.",
    ),
    (
        "Bosu Ball",
        "Balance on flat or rounded side. More challenging than wobble board. Great for advanced proprioception training.",
    ),
    (
        "Y-Balance Training",
        "Balance on one leg while reaching other leg in three directions. Excellent functional assessment and training tool.",
    ),
    (
        "Side Stepping with Band",
        "Place band around ankles or above knees. Take side steps while maintaining tension. Good for hip stabilizers.",
    ),
    (
        "Tandem Walking",
        "Walk heel-to-toe as if on a tightrope. Great for balance and proprioception.",
    ),
    (
        "Single-Leg Deadlift",
        "Balance on one leg, hinge at hips reaching toward floor. Combines balance and strength training.",
    ),
    (
        "Single-Leg Squat",
        "Squat on one leg with other leg extended. Advanced exercise for knee stability and strength.",
    ),
    (
        "Balance Reach Exercises",
        "Balance on one leg while reaching other leg in different directions. Progressive challenge to stability.",
    ),
    (
        "Agility Ladder Drills",
        "Various foot patterns through ladder on ground. Good for neuromuscular control and agility.",
    ),
    (
        "Ball Toss with Balance",
        "Stand on one leg while tossing/catching a ball. Adds cognitive challenge to balance task.",
    ),
    (
        "Single-Leg Clock Tap",
        "Balance on one leg, tap foot to clock positions (12, 3, 6, 9) while maintaining balance. Great for controlled stability.",
    ),
    (
        "STAR Excursion Balance",
        "Similar to Y-balance but with more reaching directions. Advanced proprioceptive challenge.",
    ),
    (
        "Band-Resisted Balance Work",
        "Maintain balance while band creates perturbation forces. Advanced proprioceptive training.",
    ),
];

/// Plyometrics.
pub(super) const PLYOMETRIC_EXERCISES: &[(&str, &str)] = &[
    (
        "Double-Leg Hops",
        "Start with small, controlled hops in place. Progress to forward/backward and side-to-side. Focus on soft landings with bent knees.",
    ),
    (
        "Lateral Hops",
        "Jump side to side over line or small object. Start small, progress distance and height. Important for change of direction confidence.",
    ),
    (
        "Box Jumps",
        "Jump onto raised platform, step down. Focus on soft, controlled landing. Height progressions based on control.",
    ),
    (
        "Lunge Jumps",
        "Start in lunge position, jump and switch legs mid-air. Advanced plyometric for power development.",
    ),
    (
        "Depth Jumps",
        "Step off box, land and immediately jump again. Advanced plyometric for reactive strength.",
    ),
    (
        "Skater Jumps",
        "Lateral jumps landing on one leg, mimicking skating motion. Great for lateral stability and power.",
    ),
    (
        "Broad Jumps",
        "Jump forward for distance with double-leg takeoff and landing. Power development with horizontal emphasis.",
    ),
    (
        "Tuck Jumps",
        "Jump straight up, bringing knees toward chest. Advanced plyometric for vertical power.",
    ),
    (
        "Split Jumps",
        "Similar to lunge jumps but with more vertical emphasis. Good progression before more intense plyometrics.",
    ),
    (
        "Single-Leg Hops",
        "Hopping on one leg in different directions. Advanced progression requiring good stability and strength.",
    ),
    (
        "Jump Rope",
        "Basic jumping or running in place with rope. Low-level plyometric with good endurance component.",
    ),
    (
        "Reactive Squat Jumps",
        "Quickly transition from landing to jumping again. Tests and builds reactive strength.",
    ),
    (
        "Lateral Bound",
        "Powerful lateral jumps emphasizing distance. More advanced than lateral hops.",
    ),
    (
        "Forward/Backward Bound",
        "Powerful jumps forward or backward. Tests linear power development.",
    ),
    (
        "Band-Resisted Jumps",
        "Place band around thighs. Perform small jumps against resistance. Teaches proper landing mechanics with external feedback.",
    ),
    (
        "Drop Jumps",
        "More intense version of depth jumps focusing on minimal ground contact time. Advanced plyometric.",
    ),
];

/// Martial Arts Training.
pub(super) const MARTIAL_ARTS_EXERCISES: &[(&str, &str)] = &[
    (
        "Shadow Boxing",
        "Practice punches and defensive movements without contact. Low-impact way to maintain conditioning.",
    ),
    (
        "Front Kick Drills",
        "Practice front kicks with focus on control and gradually increasing height. Good for hip flexor strength and knee control.",
    ),
    (
        "Roundhouse Kick",
        "Circular kick targeting side of opponent. Start with low height, progress as tolerated. Good for hip rotation and control.",
    ),
    (
        "Side Kick",
        "Linear kick to side with blade of foot. Start low and controlled, progress height. Good for hip abductor strength.",
    ),
    (
        "Defensive Footwork",
        "Practice movement patterns focusing on proper foot placement and weight shifting. Essential for safe return to sport.",
    ),
    (
        "Speed Bag",
        "Quick rhythmic punching of suspended bag. Good hand-eye coordination and endurance.",
    ),
    (
        "Heavy Bag",
        "Striking larger bag with punches and kicks. Progress intensity and techniques as knee tolerates.",
    ),
    (
        "Technical Sparring",
        "Light contact practice with partner. Emphasize control rather than power during rehabilitation.",
    ),
    (
        "Slow Motion Kicks",
        "Perform kicks at reduced speed focusing on perfect form. Great for regaining neuromuscular control.",
    ),
    (
        "Stance Transitions",
        "Practice shifting between fighting stances smoothly. Builds lower body control and stability.",
    ),
    (
        "Band-Resisted Kicks",
        "Perform kicks against band resistance. Builds strength in specific kicking patterns.",
    ),
    (
        "Knee Strike Practice",
        "Practice knee strike techniques gradually. Direct knee strengthening in functional pattern.",
    ),
    (
        "Focus Mitt Work",
        "Strike partner-held targets. Partner can adjust height and position based on rehabilitation stage.",
    ),
    (
        "Agility Ladder",
        "Footwork drills through ladder on ground. Builds agility and foot coordination.",
    ),
    (
        "Controlled Pivoting",
        "Practice pivot movements slowly with focus on technique. Critical for knee confidence in rotational movements.",
    ),
    (
        "Slide Steps",
        "Practice sliding step techniques common in martial arts. Low-impact movement pattern training.",
    ),
    (
        "Blocking Drills",
        "Practice defensive blocking techniques. May involve less knee stress than attacking techniques.",
    ),
];

/// Recovery.
pub(super) const RECOVERY_EXERCISES: &[(&str, &str)] = &[
    (
        "Foam Rolling",
        "Self-myofascial release using foam roller. Target quads, ITB, hamstrings, and calves to reduce muscle tension.",
    ),
    (
        "Massage Gun",
        "Use percussion massage device on tight muscles. Effective for localized muscle tension relief.",
    ),
    (
        "Ice",
        "Apply ice pack for 15-20 minutes. Helpful for acute pain or post-exercise inflammation management.",
    ),
    (
        "Compression",
        "Use compression sleeve or wrap. Helps manage swelling and provides proprioceptive feedback.",
    ),
    (
        "Stretching",
        "Gentle static stretching of all lower limb muscles. Hold each stretch 30-60 seconds without bouncing.",
    ),
    (
        "EMS",
        "Electrical muscle stimulation. Useful for muscle reeducation and pain management.",
    ),
    (
        "Contrast Bath",
        "Alternate hot and cold water immersion. Can help with circulation and pain management.",
    ),
    (
        "Light Cycling",
        "Gentle cycling with minimal resistance. Active recovery that promotes circulation without stress.",
    ),
    (
        "Pool Walking",
        "Walking in water for reduced weight-bearing. Excellent for early-stage loading within pain limits.",
    ),
    (
        "Static Stretching",
        "Hold stretches for 30+ seconds. Most effective after activity when tissues are warm.",
    ),
    (
        "Dynamic Stretching",
        "Moving stretches without holding. Good preparation before more intense activity.",
    ),
    (
        "PNF Stretching",
        "Contract-relax stretching technique. Contract muscle for 5-6 seconds, then relax and stretch further. More effective than static stretching alone.",
    ),
    (
        "Meditation",
        "Mind-body practice focusing on breathing and present moment. Can help with pain management and rehabilitation mindset.",
    ),
    (
        "Deep Breathing",
        "Diaphragmatic breathing exercises. Reduces stress which can impact muscle tension and recovery.",
    ),
    (
        "Self-Massage",
        "Manual massage techniques performed on yourself. Can target specific trigger points or tight areas.",
    ),
    (
        "TENS Unit",
        "Transcutaneous electrical nerve stimulation. May help with pain management through different mechanism than EMS.",
    ),
    (
        "Progressive Muscle Relaxation",
        "Systematically tense and release muscle groups. Helps identify and reduce chronic tension patterns.",
    ),
    (
        "Band-Assisted Stretching",
        "Use a band to assist in stretching tight muscles, particularly hamstrings and calves. Provides control and leverage for effective stretching.",
    ),
    (
        "Joint Mobilizations",
        "Gentle oscillation movements of the knee joint to improve mobility without strain. Can be self-performed or with physical therapist.",
    ),
];
