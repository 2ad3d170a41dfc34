//! The built-in document collection.
//!
//! A fixed literal catalog served when no external dataset is configured.
//! Built once on first access and never mutated afterwards; every consumer
//! sees the same read-only snapshot.

use std::sync::OnceLock;

use crate::models::{Author, Document, DocumentBuilder, DocumentType, Subject};

static BUILTIN: OnceLock<Vec<Document>> = OnceLock::new();

/// The built-in corpus snapshot.
pub fn builtin() -> &'static [Document] {
    BUILTIN.get_or_init(build_documents)
}

fn build_documents() -> Vec<Document> {
    vec![
        DocumentBuilder::new(
            "1",
            "Deep Learning Approaches for Natural Language Processing: A Comprehensive Survey",
            DocumentType::ResearchPaper,
            Subject::ComputerScience,
            2024,
        )
        .author(Author::with_affiliation("Dr. Sarah Chen", "MIT Computer Science"))
        .author(Author::with_affiliation("Prof. Michael Zhang", "Stanford AI Lab"))
        .abstract_text(
            "This paper presents a comprehensive survey of deep learning techniques applied to \
             natural language processing tasks. We examine various neural network architectures \
             including transformers, BERT, GPT, and their applications in machine translation, \
             sentiment analysis, and text generation. Our analysis covers recent advancements \
             and identifies future research directions in the field.",
        )
        .keywords(["Deep Learning", "NLP", "Transformers", "BERT", "Neural Networks"])
        .journal("Journal of Artificial Intelligence Research")
        .volume("78")
        .pages("145-198")
        .doi("10.1613/jair.1.12345")
        .views(15420)
        .citations(234)
        .build(),
        DocumentBuilder::new(
            "2",
            "Quantum Computing: Principles, Algorithms, and Applications",
            DocumentType::Book,
            Subject::Physics,
            2023,
        )
        .author(Author::with_affiliation("Dr. Robert Williams", "Caltech Physics Department"))
        .abstract_text(
            "A comprehensive introduction to quantum computing covering fundamental principles \
             of quantum mechanics, quantum algorithms including Shor's and Grover's algorithms, \
             quantum error correction, and real-world applications. This book serves as both a \
             textbook for graduate students and a reference for researchers.",
        )
        .keywords(["Quantum Computing", "Quantum Algorithms", "Quantum Mechanics", "Shor Algorithm"])
        .views(8934)
        .citations(156)
        .build(),
        DocumentBuilder::new(
            "3",
            "CRISPR-Cas9 Gene Editing: Therapeutic Applications and Ethical Considerations",
            DocumentType::JournalArticle,
            Subject::Medicine,
            2024,
        )
        .author(Author::with_affiliation("Dr. Emily Johnson", "Harvard Medical School"))
        .author(Author::with_affiliation("Dr. David Lee", "Johns Hopkins University"))
        .author(Author::with_affiliation("Dr. Maria Garcia", "Mayo Clinic"))
        .abstract_text(
            "Gene editing using CRISPR-Cas9 has revolutionized molecular biology and medicine. \
             This article reviews recent therapeutic applications in treating genetic disorders, \
             cancers, and infectious diseases. We also discuss ethical implications, safety \
             concerns, and regulatory frameworks governing clinical applications of gene editing \
             technologies.",
        )
        .keywords(["CRISPR", "Gene Editing", "Genetic Therapy", "Bioethics", "Molecular Biology"])
        .journal("Nature Medicine")
        .volume("30")
        .pages("567-589")
        .doi("10.1038/s41591-024-12345")
        .views(22100)
        .citations(445)
        .build(),
        DocumentBuilder::new(
            "4",
            "Sustainable Energy Systems: Integration of Renewable Sources in Smart Grids",
            DocumentType::ResearchPaper,
            Subject::Engineering,
            2024,
        )
        .author(Author::with_affiliation("Dr. James Anderson", "TU Delft Energy Systems"))
        .author(Author::with_affiliation("Prof. Lisa Wang", "ETH Zurich"))
        .abstract_text(
            "This research investigates the integration of renewable energy sources into modern \
             smart grid infrastructure. We present novel control algorithms for managing \
             intermittent power generation from solar and wind sources, energy storage \
             optimization strategies, and demand-response mechanisms that enhance grid stability \
             and efficiency.",
        )
        .keywords(["Renewable Energy", "Smart Grids", "Solar Power", "Wind Energy", "Energy Storage"])
        .journal("IEEE Transactions on Smart Grid")
        .volume("15")
        .pages("1023-1045")
        .doi("10.1109/TSG.2024.12345")
        .views(12567)
        .citations(189)
        .build(),
        DocumentBuilder::new(
            "5",
            "Machine Learning in Drug Discovery: From Molecular Design to Clinical Trials",
            DocumentType::ReviewPaper,
            Subject::Medicine,
            2023,
        )
        .author(Author::with_affiliation("Dr. Patricia Martinez", "Pfizer Research"))
        .author(Author::with_affiliation("Dr. Thomas Brown", "Cambridge Pharmaceutical Sciences"))
        .abstract_text(
            "This review examines the application of machine learning techniques in \
             pharmaceutical research and drug discovery. Topics include molecular property \
             prediction, de novo drug design, toxicity prediction, and optimization of clinical \
             trial design. We analyze successful case studies and discuss challenges in \
             deploying AI systems in pharmaceutical development.",
        )
        .keywords(["Machine Learning", "Drug Discovery", "Pharmaceutical Research", "AI in Medicine"])
        .journal("Drug Discovery Today")
        .volume("28")
        .pages("234-267")
        .doi("10.1016/j.drudis.2023.12345")
        .views(18900)
        .citations(312)
        .build(),
        DocumentBuilder::new(
            "6",
            "Blockchain Technology and Decentralized Finance: Security Analysis",
            DocumentType::Thesis,
            Subject::ComputerScience,
            2024,
        )
        .author(Author::with_affiliation("Alexandra Kim", "Carnegie Mellon University"))
        .abstract_text(
            "This doctoral thesis presents a comprehensive security analysis of blockchain \
             protocols and decentralized finance (DeFi) systems. We identify vulnerabilities in \
             smart contracts, analyze attack vectors in consensus mechanisms, and propose novel \
             cryptographic solutions to enhance security in distributed ledger technologies.",
        )
        .keywords(["Blockchain", "Cryptocurrency", "Smart Contracts", "Cybersecurity", "DeFi"])
        .views(7845)
        .citations(67)
        .build(),
        DocumentBuilder::new(
            "7",
            "Climate Change Modeling: Predictive Analytics and Environmental Impact Assessment",
            DocumentType::ResearchPaper,
            Subject::Physics,
            2024,
        )
        .author(Author::with_affiliation("Dr. Richard Thompson", "NOAA Climate Research"))
        .author(Author::with_affiliation("Dr. Susan Miller", "Oxford Environmental Sciences"))
        .abstract_text(
            "We present advanced climate modeling techniques using machine learning and \
             statistical methods to predict long-term environmental changes. Our models \
             incorporate atmospheric data, ocean temperature patterns, and greenhouse gas \
             concentrations to forecast climate scenarios and assess potential impacts on \
             ecosystems and human societies.",
        )
        .keywords(["Climate Change", "Environmental Science", "Predictive Modeling", "Global Warming"])
        .journal("Environmental Research Letters")
        .volume("19")
        .pages("456-478")
        .doi("10.1088/1748-9326/ab12345")
        .views(14230)
        .citations(278)
        .build(),
        DocumentBuilder::new(
            "8",
            "Advances in Cancer Immunotherapy: CAR-T Cell Engineering and Clinical Outcomes",
            DocumentType::JournalArticle,
            Subject::Medicine,
            2024,
        )
        .author(Author::with_affiliation("Dr. Jennifer White", "Memorial Sloan Kettering"))
        .author(Author::with_affiliation("Dr. Andrew Davis", "MD Anderson Cancer Center"))
        .abstract_text(
            "Chimeric antigen receptor (CAR) T-cell therapy represents a breakthrough in cancer \
             treatment. This article reviews recent advances in CAR-T cell engineering, \
             manufacturing processes, clinical trial results across various cancer types, and \
             strategies to overcome current limitations including tumor heterogeneity and immune \
             escape mechanisms.",
        )
        .keywords(["Immunotherapy", "CAR-T Cells", "Cancer Treatment", "Cell Therapy", "Oncology"])
        .journal("The New England Journal of Medicine")
        .volume("390")
        .pages("789-812")
        .doi("10.1056/NEJMra2345678")
        .views(25600)
        .citations(523)
        .build(),
        DocumentBuilder::new(
            "9",
            "Artificial Intelligence in Financial Markets: Algorithmic Trading and Risk Management",
            DocumentType::BookChapter,
            Subject::Management,
            2023,
        )
        .author(Author::with_affiliation("Dr. Christopher Lee", "London School of Economics"))
        .author(Author::with_affiliation("Prof. Margaret Chen", "Wharton Business School"))
        .abstract_text(
            "This chapter explores the application of artificial intelligence and machine \
             learning in financial markets. We examine algorithmic trading strategies, portfolio \
             optimization, risk assessment models, fraud detection systems, and regulatory \
             compliance automation. Case studies from major financial institutions illustrate \
             practical implementations and outcomes.",
        )
        .keywords(["AI", "Finance", "Algorithmic Trading", "Risk Management", "FinTech"])
        .views(9876)
        .citations(145)
        .build(),
        DocumentBuilder::new(
            "10",
            "Neural Interface Technologies: Brain-Computer Interfaces for Medical Applications",
            DocumentType::ResearchPaper,
            Subject::Engineering,
            2024,
        )
        .author(Author::with_affiliation("Dr. Kevin Park", "Duke Neuroscience Center"))
        .author(Author::with_affiliation("Dr. Rachel Green", "Imperial College London"))
        .abstract_text(
            "We investigate brain-computer interface (BCI) technologies for medical applications \
             including neural prosthetics, stroke rehabilitation, and communication systems for \
             paralyzed patients. Our research presents novel signal processing algorithms, \
             electrode designs, and machine learning classifiers that improve BCI accuracy and \
             usability.",
        )
        .keywords(["Brain-Computer Interface", "Neuroscience", "Medical Devices", "Neural Engineering"])
        .journal("Journal of Neural Engineering")
        .volume("21")
        .pages("234-256")
        .doi("10.1088/1741-2552/ab12345")
        .views(11200)
        .citations(198)
        .build(),
        DocumentBuilder::new(
            "11",
            "Nanotechnology in Drug Delivery Systems: Targeted Cancer Therapeutics",
            DocumentType::Dissertation,
            Subject::Chemistry,
            2023,
        )
        .author(Author::with_affiliation("Michael Rodriguez", "MIT Chemical Engineering"))
        .abstract_text(
            "This dissertation investigates nanoparticle-based drug delivery systems for \
             targeted cancer therapy. We design and characterize novel nanocarriers with \
             enhanced tumor-targeting capabilities, controlled drug release mechanisms, and \
             reduced systemic toxicity. In vivo studies demonstrate superior efficacy compared \
             to conventional chemotherapy.",
        )
        .keywords(["Nanotechnology", "Drug Delivery", "Cancer", "Nanoparticles", "Biomaterials"])
        .views(6543)
        .citations(89)
        .build(),
        DocumentBuilder::new(
            "12",
            "Cybersecurity in IoT Networks: Threat Detection and Prevention Strategies",
            DocumentType::TechnicalDocument,
            Subject::ComputerScience,
            2024,
        )
        .author(Author::with_affiliation("Dr. Daniel Kim", "Georgia Tech Cybersecurity"))
        .author(Author::with_affiliation("Dr. Amy Wilson", "Carnegie Mellon CyLab"))
        .abstract_text(
            "Internet of Things (IoT) networks face unique cybersecurity challenges due to \
             resource constraints and heterogeneous devices. This technical report presents \
             threat modeling for IoT ecosystems, intrusion detection systems optimized for \
             low-power devices, and secure communication protocols that balance security with \
             computational efficiency.",
        )
        .keywords(["IoT", "Cybersecurity", "Network Security", "Intrusion Detection", "Privacy"])
        .views(13400)
        .citations(156)
        .build(),
    ]
}
